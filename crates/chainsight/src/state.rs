//! Application state shared between the app shell and the screens

use jiff::civil::Date;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use chainsight_core::monitoring::AlertThresholds;
use chainsight_core::{
    Dataset, DemandModel, MonitorSnapshot, NegotiationModel, NegotiationOutcome, SavingsEstimate,
};
use chainsight_core::model::Region;

use crate::components::input::InputField;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabId {
    Monitoring,
    Inventory,
    Negotiation,
}

impl TabId {
    pub const ALL: [TabId; 3] = [TabId::Monitoring, TabId::Inventory, TabId::Negotiation];

    pub fn name(&self) -> &'static str {
        match self {
            TabId::Monitoring => "Monitoring",
            TabId::Inventory => "Inventory",
            TabId::Negotiation => "Negotiation",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            TabId::Monitoring => 0,
            TabId::Inventory => 1,
            TabId::Negotiation => 2,
        }
    }

    pub fn next(&self) -> TabId {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> TabId {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Form state for the real-time monitoring dashboard
#[derive(Debug)]
pub struct MonitoringForm {
    pub product: InputField,
    pub region: Region,
    pub date: InputField,
    /// 0 = product, 1 = region, 2 = date
    pub focused_field: usize,
    pub snapshot: Option<MonitorSnapshot>,
}

impl MonitoringForm {
    pub const FIELD_COUNT: usize = 3;

    pub fn new(today: Date) -> Self {
        Self {
            product: InputField::default(),
            region: Region::North,
            date: InputField::with_value(today.to_string()),
            focused_field: 0,
            snapshot: None,
        }
    }
}

/// Form state for the inventory cost-savings dashboard
#[derive(Debug, Default)]
pub struct InventoryForm {
    pub product: InputField,
    pub region: Region,
    pub inventory: InputField,
    pub lead_time: InputField,
    /// 0 = product, 1 = region, 2 = inventory, 3 = lead time
    pub focused_field: usize,
    pub estimate: Option<SavingsEstimate>,
}

impl InventoryForm {
    pub const FIELD_COUNT: usize = 4;
}

/// Form state for the supplier negotiation dashboard
#[derive(Debug, Default)]
pub struct NegotiationForm {
    pub supplier: InputField,
    pub outcome: Option<NegotiationOutcome>,
}

pub struct AppState {
    pub active_tab: TabId,
    pub exit: bool,
    pub error_message: Option<String>,

    // Read-only dataset and the models fitted once at startup
    pub dataset: Dataset,
    pub demand_model: DemandModel,
    pub negotiation_model: NegotiationModel,
    pub thresholds: AlertThresholds,

    /// Rng for the monitoring supplier sample, drawn fresh per submission
    pub rng: SmallRng,

    pub monitoring: MonitoringForm,
    pub inventory: InventoryForm,
    pub negotiation: NegotiationForm,
}

impl AppState {
    pub fn new(
        dataset: Dataset,
        demand_model: DemandModel,
        negotiation_model: NegotiationModel,
        today: Date,
    ) -> Self {
        Self {
            active_tab: TabId::Monitoring,
            exit: false,
            error_message: None,
            dataset,
            demand_model,
            negotiation_model,
            thresholds: AlertThresholds::default(),
            rng: SmallRng::from_os_rng(),
            monitoring: MonitoringForm::new(today),
            inventory: InventoryForm::default(),
            negotiation: NegotiationForm::default(),
        }
    }

    pub fn switch_tab(&mut self, tab: TabId) {
        self.active_tab = tab;
        self.clear_error();
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_cycle_covers_all_tabs() {
        let mut tab = TabId::Monitoring;
        for expected in [TabId::Inventory, TabId::Negotiation, TabId::Monitoring] {
            tab = tab.next();
            assert_eq!(tab, expected);
        }
        assert_eq!(TabId::Monitoring.prev(), TabId::Negotiation);
    }
}
