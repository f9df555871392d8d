// Appliance domain model and the preset wattage catalog
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplianceCategory {
    Cooling,
    Heating,
    Kitchen,
    Laundry,
    Lighting,
    Entertainment,
    #[default]
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliancePreset {
    pub name: String,
    pub category: ApplianceCategory,
    pub wattage: f64,
}

impl AppliancePreset {
    pub fn new(name: impl Into<String>, category: ApplianceCategory, wattage: f64) -> Self {
        Self {
            name: name.into(),
            category,
            wattage,
        }
    }
}

/// One appliance line of an estimation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplianceUsageInput {
    pub name: String,
    pub count: u32,
    pub hours: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watts: Option<f64>,
}

impl ApplianceUsageInput {
    #[cfg(test)]
    pub fn new(name: impl Into<String>, count: u32, hours: f64, watts: Option<f64>) -> Self {
        Self {
            name: name.into(),
            count,
            hours,
            watts,
        }
    }

    /// Explicit wattage, if one was given. Zero counts as "not given".
    pub fn explicit_watts(&self) -> Option<f64> {
        self.watts.filter(|w| *w != 0.0 && !w.is_nan())
    }
}

/// Read-only list of typical appliance wattages, looked up by name.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetCatalog {
    presets: Vec<AppliancePreset>,
}

impl PresetCatalog {
    pub fn new(presets: Vec<AppliancePreset>) -> Self {
        Self { presets }
    }

    pub fn presets(&self) -> &[AppliancePreset] {
        &self.presets
    }

    /// First preset whose name equals `name`, ignoring case.
    pub fn find(&self, name: &str) -> Option<&AppliancePreset> {
        let needle = name.to_lowercase();
        self.presets.iter().find(|p| p.name.to_lowercase() == needle)
    }

    pub fn wattage_for(&self, name: &str) -> Option<f64> {
        self.find(name).map(|p| p.wattage)
    }
}

impl Default for PresetCatalog {
    fn default() -> Self {
        use ApplianceCategory::*;

        let presets = vec![
            AppliancePreset::new("Ceiling Fan", Cooling, 75.0),
            AppliancePreset::new("Table Fan", Cooling, 50.0),
            AppliancePreset::new("AC (1.0 Ton)", Cooling, 1000.0),
            AppliancePreset::new("AC (1.5 Ton)", Cooling, 1500.0),
            AppliancePreset::new("AC (2.0 Ton)", Cooling, 2000.0),
            AppliancePreset::new("Cooler", Cooling, 150.0),
            AppliancePreset::new("LED Bulb", Lighting, 9.0),
            AppliancePreset::new("Tube Light (LED)", Lighting, 20.0),
            AppliancePreset::new("Tube Light (Old)", Lighting, 40.0),
            AppliancePreset::new("CFL", Lighting, 15.0),
            AppliancePreset::new("Refrigerator (Single Door)", Kitchen, 150.0),
            AppliancePreset::new("Refrigerator (Double Door)", Kitchen, 250.0),
            AppliancePreset::new("Microwave", Kitchen, 1200.0),
            AppliancePreset::new("Induction Cooktop", Kitchen, 1500.0),
            AppliancePreset::new("Electric Kettle", Kitchen, 1500.0),
            AppliancePreset::new("Toaster", Kitchen, 800.0),
            AppliancePreset::new("Mixer Grinder", Kitchen, 500.0),
            AppliancePreset::new("Dishwasher", Kitchen, 1200.0),
            AppliancePreset::new("Washing Machine", Laundry, 500.0),
            AppliancePreset::new("Electric Iron", Laundry, 1000.0),
            AppliancePreset::new("TV (LED 32-43\")", Entertainment, 60.0),
            AppliancePreset::new("TV (LED 50\"+)", Entertainment, 100.0),
            AppliancePreset::new("Desktop Computer", Entertainment, 200.0),
            AppliancePreset::new("Laptop", Entertainment, 50.0),
            AppliancePreset::new("Gaming Console", Entertainment, 150.0),
            AppliancePreset::new("Geyser (Instant)", Heating, 3000.0),
            AppliancePreset::new("Geyser (Storage)", Heating, 2000.0),
            AppliancePreset::new("Room Heater", Heating, 1500.0),
            AppliancePreset::new("Water Pump", Other, 750.0),
        ];

        Self::new(presets)
    }
}
