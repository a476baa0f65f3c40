use crate::core::journal::Journal;
use crate::core::lines::{GeneralLine, VipLine};
use crate::core::report::Report;
use crate::domain::model::{Customer, LogEntry, ServiceCounters, ServiceEvent, Tier};
use crate::domain::ports::{ConfigProvider, EventSink};
use crate::utils::error::Result;

pub const DEFAULT_GENERAL_SEED: [&str; 3] = ["Alex", "Brian", "Ron"];
/// Push order; "Dan" ends up on top.
pub const DEFAULT_VIP_SEED: [&str; 3] = ["Roll", "Charlie", "Dan"];

/// Owns both waiting lines and the served counters. Every operation emits
/// exactly one event to the sink.
#[derive(Debug)]
pub struct PassesService<E: EventSink = Journal> {
    general: GeneralLine,
    vip: VipLine,
    counters: ServiceCounters,
    sink: E,
}

impl<E: EventSink> PassesService<E> {
    /// Both lines empty, nothing emitted.
    pub fn new(sink: E) -> Self {
        Self {
            general: GeneralLine::new(),
            vip: VipLine::new(),
            counters: ServiceCounters::default(),
            sink,
        }
    }

    pub fn seeded(sink: E) -> Result<Self> {
        Self::with_seed(sink, &DEFAULT_GENERAL_SEED, &DEFAULT_VIP_SEED)
    }

    /// Loads general names in arrival order and pushes VIP names in order,
    /// then emits a single sample-data event.
    pub fn with_seed<S: AsRef<str>>(sink: E, general: &[S], vip: &[S]) -> Result<Self> {
        let mut service = Self::new(sink);
        for name in general {
            service.general.enqueue(Customer::new(name.as_ref())?);
        }
        for name in vip {
            service.vip.push(Customer::new(name.as_ref())?);
        }

        tracing::debug!(
            general = service.general.len(),
            vip = service.vip.len(),
            "Seeded waiting lines"
        );
        service.emit(ServiceEvent::SampleDataLoaded {
            general: service.general.len(),
            vip: service.vip.len(),
        });
        Ok(service)
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C, sink: E) -> Result<Self> {
        if config.seed_enabled() {
            Self::with_seed(sink, config.seed_general(), config.seed_vip())
        } else {
            Ok(Self::new(sink))
        }
    }

    pub fn add_general(&mut self, name: &str) -> Result<Customer> {
        self.add(Tier::General, name)
    }

    pub fn add_vip(&mut self, name: &str) -> Result<Customer> {
        self.add(Tier::Vip, name)
    }

    /// `None` means the line was empty; that is reported, not an error.
    pub fn serve_general(&mut self) -> Option<Customer> {
        self.serve(Tier::General)
    }

    pub fn serve_vip(&mut self) -> Option<Customer> {
        self.serve(Tier::Vip)
    }

    /// Rejects blank names without touching any state.
    pub fn add(&mut self, tier: Tier, name: &str) -> Result<Customer> {
        let customer = Customer::new(name).inspect_err(|e| {
            tracing::warn!(%tier, "Rejected customer name: {}", e);
        })?;

        match tier {
            Tier::General => self.general.enqueue(customer.clone()),
            Tier::Vip => self.vip.push(customer.clone()),
        }
        tracing::debug!(%tier, name = customer.name(), "Customer joined line");

        self.emit(ServiceEvent::Added {
            tier,
            name: customer.name().to_string(),
        });
        Ok(customer)
    }

    pub fn serve(&mut self, tier: Tier) -> Option<Customer> {
        let next = match tier {
            Tier::General => self.general.dequeue(),
            Tier::Vip => self.vip.pop(),
        };

        let event = match &next {
            Some(customer) => {
                self.counters.record_served(tier);
                tracing::debug!(
                    %tier,
                    name = customer.name(),
                    served = self.counters.served(tier),
                    "Customer served"
                );
                ServiceEvent::Served {
                    tier,
                    name: customer.name().to_string(),
                }
            }
            None => {
                tracing::debug!(%tier, "Serve requested on empty line");
                ServiceEvent::NothingToServe { tier }
            }
        };
        self.emit(event);
        next
    }

    pub fn generate_report(&self) -> Report {
        Report {
            vip_served: self.counters.vip_served,
            general_served: self.counters.general_served,
            remaining_vip: self.vip.iter().map(|c| c.name().to_string()).collect(),
            remaining_general: self.general.iter().map(|c| c.name().to_string()).collect(),
        }
    }

    pub fn counters(&self) -> ServiceCounters {
        self.counters
    }

    pub fn general_line(&self) -> &GeneralLine {
        &self.general
    }

    pub fn vip_line(&self) -> &VipLine {
        &self.vip
    }

    pub fn sink(&self) -> &E {
        &self.sink
    }

    fn emit(&mut self, event: ServiceEvent) {
        self.sink.emit(LogEntry::now(event));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names<'a>(iter: impl Iterator<Item = &'a Customer>) -> Vec<String> {
        iter.map(|c| c.name().to_string()).collect()
    }

    fn seeded() -> PassesService {
        PassesService::seeded(Journal::new()).unwrap()
    }

    #[test]
    fn test_seed_order_and_initial_report() {
        let service = seeded();
        let report = service.generate_report();

        assert_eq!(report.remaining_vip, vec!["Dan", "Charlie", "Roll"]);
        assert_eq!(report.remaining_general, vec!["Alex", "Brian", "Ron"]);
        assert_eq!(report.vip_served, 0);
        assert_eq!(report.general_served, 0);

        let lines: Vec<String> = service.sink().lines().collect();
        assert_eq!(
            lines,
            vec!["Sample data loaded: 3 general and 3 VIP customers added."]
        );
    }

    #[test]
    fn test_general_is_fifo() {
        let mut service = PassesService::new(Journal::new());
        for name in ["a", "b", "c", "d"] {
            service.add_general(name).unwrap();
        }

        let served: Vec<String> = std::iter::from_fn(|| service.serve_general())
            .map(Customer::into_name)
            .collect();
        assert_eq!(served, vec!["a", "b", "c", "d"]);
        assert_eq!(service.counters().general_served, 4);
    }

    #[test]
    fn test_vip_is_lifo_with_interleaving() {
        let mut service = PassesService::new(Journal::new());
        service.add_vip("a").unwrap();
        service.add_vip("b").unwrap();
        assert_eq!(service.serve_vip().unwrap().name(), "b");
        service.add_vip("c").unwrap();
        assert_eq!(service.serve_vip().unwrap().name(), "c");
        assert_eq!(service.serve_vip().unwrap().name(), "a");
        assert!(service.serve_vip().is_none());
        assert_eq!(service.counters().vip_served, 3);
    }

    #[test]
    fn test_blank_names_are_rejected_without_state_change() {
        let mut service = seeded();
        let before = service.generate_report();
        let journal_len = service.sink().len();

        assert!(service.add_general("").is_err());
        assert!(service.add_general("   ").is_err());
        assert!(service.add_vip("\t").is_err());

        assert_eq!(service.generate_report(), before);
        assert_eq!(service.sink().len(), journal_len);
    }

    #[test]
    fn test_name_is_stored_trimmed() {
        let mut service = PassesService::new(Journal::new());
        let customer = service.add_general(" Alex ").unwrap();
        assert_eq!(customer.name(), "Alex");
        assert_eq!(names(service.general_line().iter()), vec!["Alex"]);
        assert_eq!(
            service.sink().lines().last().unwrap(),
            "Added general customer: Alex"
        );
    }

    #[test]
    fn test_empty_serve_is_a_logged_no_op() {
        let mut service = PassesService::new(Journal::new());
        service.add_vip("Zed").unwrap();

        assert!(service.serve_general().is_none());
        assert_eq!(service.counters(), ServiceCounters::default());
        assert_eq!(names(service.vip_line().iter()), vec!["Zed"]);
        assert_eq!(
            service.sink().lines().last().unwrap(),
            "No general customers to serve"
        );
    }

    #[test]
    fn test_empty_vip_serve_leaves_general_line_alone() {
        let mut service = PassesService::new(Journal::new());
        service.add_general("Ann").unwrap();
        service.add_general("Ben").unwrap();

        assert!(service.serve_vip().is_none());
        assert_eq!(service.counters(), ServiceCounters::default());
        assert_eq!(names(service.general_line().iter()), vec!["Ann", "Ben"]);
        assert_eq!(
            service.sink().lines().last().unwrap(),
            "No VIP customers to serve"
        );
    }

    #[test]
    fn test_tiers_are_independent() {
        let mut service = seeded();
        service.serve_vip();
        service.add_vip("Eve").unwrap();

        assert_eq!(service.counters().general_served, 0);
        assert_eq!(names(service.general_line().iter()), vec!["Alex", "Brian", "Ron"]);
    }

    #[test]
    fn test_two_vip_serves_then_report() {
        let mut service = seeded();
        assert_eq!(service.serve_vip().unwrap().name(), "Dan");
        assert_eq!(service.serve_vip().unwrap().name(), "Charlie");

        let report = service.generate_report();
        assert_eq!(report.remaining_vip, vec!["Roll"]);
        assert_eq!(report.vip_served, 2);
        assert_eq!(report.general_served, 0);
        assert_eq!(report.remaining_general, vec!["Alex", "Brian", "Ron"]);
    }

    #[test]
    fn test_late_arrival_waits_behind_seeded_customers() {
        let mut service = seeded();
        service.add_general("Eve").unwrap();

        assert_eq!(service.serve_general().unwrap().name(), "Alex");
        assert_eq!(service.serve_general().unwrap().name(), "Brian");
        assert_eq!(service.serve_general().unwrap().name(), "Ron");
        assert_eq!(service.serve_general().unwrap().name(), "Eve");
        assert!(service.serve_general().is_none());
        assert_eq!(service.counters().general_served, 4);
    }

    #[test]
    fn test_duplicate_names_are_independent_entries() {
        let mut service = PassesService::new(Journal::new());
        service.add_general("Sam").unwrap();
        service.add_general("Sam").unwrap();
        assert_eq!(service.general_line().len(), 2);
        service.serve_general();
        assert_eq!(service.general_line().len(), 1);
    }

    #[test]
    fn test_report_does_not_mutate_or_emit() {
        let service = seeded();
        let journal_len = service.sink().len();
        let first = service.generate_report();
        let second = service.generate_report();
        assert_eq!(first, second);
        assert_eq!(service.sink().len(), journal_len);
    }

    #[test]
    fn test_invalid_seed_name_is_rejected() {
        let result = PassesService::with_seed(Journal::new(), &["Alex", " "], &[]);
        assert!(result.is_err());
    }

    #[test]
    fn test_one_event_per_operation() {
        let mut service = PassesService::new(Journal::new());
        service.add_general("A").unwrap();
        service.serve_general();
        service.serve_general();
        service.add_vip("B").unwrap();
        service.serve_vip();

        let lines: Vec<String> = service.sink().lines().collect();
        assert_eq!(
            lines,
            vec![
                "Added general customer: A",
                "Served general customer: A",
                "No general customers to serve",
                "Added VIP customer: B",
                "Served VIP customer: B",
            ]
        );
    }
}
