use transport::Switch;

/// Best guess of the light's state. Nothing reads it back from the printer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum LightState {
    On,
    Off,
    #[default]
    Unknown,
}

impl LightState {
    pub fn is_on(self) -> Option<bool> {
        match self {
            LightState::On => Some(true),
            LightState::Off => Some(false),
            LightState::Unknown => None,
        }
    }

    pub fn inverted(self) -> Self {
        match self {
            LightState::On => LightState::Off,
            LightState::Off => LightState::On,
            LightState::Unknown => LightState::Unknown,
        }
    }
}

impl From<Switch> for LightState {
    fn from(switch: Switch) -> Self {
        match switch {
            Switch::On => LightState::On,
            Switch::Off => LightState::Off,
        }
    }
}
