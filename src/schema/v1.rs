use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversion {
    pub xy_scale: f64,
    pub z_scale: f64,
    pub fps: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputMeta {
    pub sessions: Option<u64>,
    pub records: Option<u64>,
    pub particles: Option<u64>,
    pub surviving: Option<u64>,
    pub dropped: Option<u64>,
    pub frames: Option<u64>,
    pub cutoff: u64,
    pub max_lag: Option<u64>,
    pub conversion: Conversion,
}

/// One row of the per-lag statistics table. Undefined statistics (masked-out
/// lags, missing fps) are null.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LagRow {
    pub lag: u64,
    pub tau_s: Option<f64>,
    pub msd_x: Option<f64>,
    pub msd_y: Option<f64>,
    pub msd_sum: Option<f64>,
    pub log_msd_mean: Option<f64>,
    pub log_msd_sem: Option<f64>,
    pub deff: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeffSummary {
    pub window_gmean: Option<f64>,
    pub tmin: f64,
    pub tmax: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrajMsdV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub input_meta: InputMeta,
    pub lags: Vec<LagRow>,
    pub deff: Option<DeffSummary>,
}

impl TrajMsdV1 {
    pub fn empty(tool_version: &str, cutoff: usize, conversion: Conversion) -> Self {
        Self {
            tool: "kira-trajmsd".to_string(),
            version: tool_version.to_string(),
            schema_version: "v1".to_string(),
            input_meta: InputMeta {
                sessions: None,
                records: None,
                particles: None,
                surviving: None,
                dropped: None,
                frames: None,
                cutoff: cutoff as u64,
                max_lag: None,
                conversion,
            },
            lags: Vec::new(),
            deff: None,
        }
    }
}
