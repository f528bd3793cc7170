use serde::{Deserialize, Serialize};

use crate::scoring::Weights;

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Component weights; defaults apply when absent
    #[serde(default)]
    pub weights: Option<Weights>,
}
