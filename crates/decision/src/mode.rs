use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString, Display, VariantArray, AsRefStr, Debug, Clone, Copy, PartialEq, Eq, Hash,
)]
#[strum(serialize_all = "camelCase")]
pub enum Mode {
    /// Pick one of the saved recipes
    Cook,
    /// Pick one of the saved restaurants or takeaways
    GoOut,
    /// Suggest a meal idea from what is in the pantry
    Generate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeDescriptor {
    pub mode: Mode,
    pub label: &'static str,
    pub description: &'static str,
}

pub static MODES: [ModeDescriptor; 3] = [
    ModeDescriptor {
        mode: Mode::Cook,
        label: "Cook a Recipe",
        description: "Choose from your saved recipes.",
    },
    ModeDescriptor {
        mode: Mode::GoOut,
        label: "Go Out / Order In",
        description: "Pick from your saved places.",
    },
    ModeDescriptor {
        mode: Mode::Generate,
        label: "Make Something New",
        description: "Get a dinner idea based on what's in your pantry.",
    },
];

/// Copy shown when a mode produced nothing to suggest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyState {
    pub title: &'static str,
    pub body: &'static str,
    pub call_to_action: Option<&'static str>,
}

pub const EMPTY_PANTRY: EmptyState = EmptyState {
    title: "Your pantry is empty",
    body: "Add some ingredients to your pantry first and we'll suggest a meal based on what you have.",
    call_to_action: Some("Go to Pantry"),
};

impl Mode {
    pub fn descriptor(self) -> &'static ModeDescriptor {
        match self {
            Mode::Cook => &MODES[0],
            Mode::GoOut => &MODES[1],
            Mode::Generate => &MODES[2],
        }
    }

    pub fn empty_state(self) -> EmptyState {
        match self {
            Mode::Cook => EmptyState {
                title: "No recipes saved yet!",
                body: "Add some recipes first and come back to find tonight's dinner.",
                call_to_action: Some("Go to Recipes"),
            },
            Mode::GoOut => EmptyState {
                title: "No places saved yet!",
                body: "Add a few favourite restaurants or takeaways and come back.",
                call_to_action: Some("Go to Places"),
            },
            Mode::Generate => EmptyState {
                title: "Couldn't find a match!",
                body: "Try again with different options.",
                call_to_action: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_wire_values() {
        assert_eq!(Mode::GoOut.to_string(), "goOut");
        assert_eq!(Mode::from_str("generate").unwrap(), Mode::Generate);
        assert!(Mode::from_str("eatOut").is_err());
    }

    #[test]
    fn test_descriptor_matches_mode() {
        for mode in Mode::VARIANTS {
            assert_eq!(mode.descriptor().mode, *mode);
        }
    }

    #[test]
    fn test_only_generate_has_no_call_to_action() {
        assert_eq!(Mode::Cook.empty_state().call_to_action, Some("Go to Recipes"));
        assert_eq!(Mode::GoOut.empty_state().call_to_action, Some("Go to Places"));
        assert_eq!(Mode::Generate.empty_state().call_to_action, None);
    }
}
