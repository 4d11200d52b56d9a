use serde::{Deserialize, Serialize};

/// How a question's options are laid out when shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionOrder {
    /// Options appear in catalog order.
    Fixed,
    /// Options are shuffled each time a question is shown.
    #[default]
    Shuffled,
}

impl OptionOrder {
    #[must_use]
    pub fn from_shuffle(shuffle: bool) -> Self {
        if shuffle { Self::Shuffled } else { Self::Fixed }
    }

    #[must_use]
    pub fn is_shuffled(self) -> bool {
        matches!(self, Self::Shuffled)
    }
}

/// Playthrough settings supplied by the composition root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSettings {
    option_order: OptionOrder,
}

impl QuizSettings {
    #[must_use]
    pub fn new(option_order: OptionOrder) -> Self {
        Self { option_order }
    }

    #[must_use]
    pub fn option_order(&self) -> OptionOrder {
        self.option_order
    }

    #[must_use]
    pub fn with_option_order(mut self, option_order: OptionOrder) -> Self {
        self.option_order = option_order;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_shuffle() {
        assert_eq!(QuizSettings::default().option_order(), OptionOrder::Shuffled);
    }

    #[test]
    fn from_shuffle_maps_both_ways() {
        assert_eq!(OptionOrder::from_shuffle(true), OptionOrder::Shuffled);
        assert_eq!(OptionOrder::from_shuffle(false), OptionOrder::Fixed);
        assert!(!OptionOrder::Fixed.is_shuffled());
    }
}
