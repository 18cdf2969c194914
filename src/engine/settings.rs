use serde::{Deserialize, Serialize};

use crate::config::Validate;

/// Valid field dimensions. The upper bound keeps the serialized frame
/// well below the descriptor packing base.
const MAX_FIELD_DIMENSION: usize = 1000;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSettings {
    pub field_width: usize,
    pub field_height: usize,
    #[serde(default = "default_initial_snake_length")]
    pub initial_snake_length: usize,
}

fn default_initial_snake_length() -> usize {
    3
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            field_width: 20,
            field_height: 10,
            initial_snake_length: default_initial_snake_length(),
        }
    }
}

impl GameSettings {
    pub fn new(field_width: usize, field_height: usize) -> Self {
        Self {
            field_width,
            field_height,
            ..Default::default()
        }
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        if self.field_width < 1 || self.field_width > MAX_FIELD_DIMENSION {
            return Err(format!(
                "Field width must be between 1 and {}",
                MAX_FIELD_DIMENSION
            ));
        }
        if self.field_height < 1 || self.field_height > MAX_FIELD_DIMENSION {
            return Err(format!(
                "Field height must be between 1 and {}",
                MAX_FIELD_DIMENSION
            ));
        }
        if self.initial_snake_length < 1 || self.initial_snake_length > 10 {
            return Err("Initial snake length must be between 1 and 10".to_string());
        }
        Ok(())
    }
}
