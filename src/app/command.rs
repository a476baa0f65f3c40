use crate::domain::model::Tier;
use crate::utils::error::{PassesError, Result};

pub const HELP: &str = "\
Commands:
  add-general <name>   (ag)  add a general customer to the back of the queue
  add-vip <name>       (av)  add a VIP customer to the top of the stack
  serve-general        (sg)  serve the general customer at the head
  serve-vip            (sv)  serve the most recently added VIP customer
  report               (r)   show served totals and remaining customers
  export [file]              write the report into the output directory
  help                 (?)   show this list
  quit                 (q)   end the session";

/// One operator action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// The raw text after the keyword; the service validates it.
    Add(Tier, String),
    Serve(Tier),
    Report,
    Export(Option<String>),
    Help,
    Quit,
}

impl Command {
    /// Blank lines and `#` comments yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };

        let command = match keyword.to_ascii_lowercase().as_str() {
            "add-general" | "ag" => Command::Add(Tier::General, rest.to_string()),
            "add-vip" | "av" => Command::Add(Tier::Vip, rest.to_string()),
            "serve-general" | "sg" => Command::Serve(Tier::General),
            "serve-vip" | "sv" => Command::Serve(Tier::Vip),
            "report" | "r" => Command::Report,
            "export" => Command::Export((!rest.is_empty()).then(|| rest.to_string())),
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => {
                return Err(PassesError::UnknownCommand {
                    input: keyword.to_string(),
                })
            }
        };

        Ok(Some(command))
    }
}
