use serde::Serialize;

/// Independent, non-exclusive policy flags for one event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AnomalyFlags {
    pub is_high_temp: bool,
    pub is_early_arrival: bool,
    pub is_late_arrival: bool,
    pub is_early_exit: bool,
    pub is_late_departure: bool,
}

impl AnomalyFlags {
    pub fn any(&self) -> bool {
        self.is_high_temp
            || self.is_early_arrival
            || self.is_late_arrival
            || self.is_early_exit
            || self.is_late_departure
    }

    /// Short markers for tables: `TEMP`, `EARLY-IN`, `LATE-IN`, `EARLY-OUT`, `LATE-OUT`.
    pub fn markers(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        if self.is_high_temp {
            out.push("TEMP");
        }
        if self.is_early_arrival {
            out.push("EARLY-IN");
        }
        if self.is_late_arrival {
            out.push("LATE-IN");
        }
        if self.is_early_exit {
            out.push("EARLY-OUT");
        }
        if self.is_late_departure {
            out.push("LATE-OUT");
        }
        out
    }
}
