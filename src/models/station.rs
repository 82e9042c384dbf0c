use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use crate::error::Result;
use crate::utils::constants::{DEFAULT_REGION_ID, DEFAULT_STATION_ID};

/// JMA station identity: prefecture-level `prec_no` and local `block_no`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
pub struct Station {
    #[validate(range(min = 1))]
    pub region_id: u32,

    #[validate(range(min = 1))]
    pub station_id: u32,
}

impl Station {
    pub fn new(region_id: u32, station_id: u32) -> Self {
        Self {
            region_id,
            station_id,
        }
    }

    pub fn check(&self) -> Result<()> {
        self.validate()?;
        Ok(())
    }
}

impl Default for Station {
    fn default() -> Self {
        Self::new(DEFAULT_REGION_ID, DEFAULT_STATION_ID)
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "prec_no={} block_no={}", self.region_id, self.station_id)
    }
}
