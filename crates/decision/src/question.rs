use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::Mode;

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
)]
#[strum(serialize_all = "lowercase")]
pub enum QuestionKey {
    Time,
    Cuisine,
    Protein,
    Service,
    Vibe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionOption {
    pub label: &'static str,
    pub sublabel: Option<&'static str>,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub key: QuestionKey,
    pub prompt: &'static str,
    pub options: &'static [QuestionOption],
}

impl Question {
    pub fn option(&self, value: &str) -> Option<&'static QuestionOption> {
        self.options.iter().find(|o| o.value == value)
    }
}

const fn option(label: &'static str, value: &'static str) -> QuestionOption {
    QuestionOption {
        label,
        sublabel: None,
        value,
    }
}

const TIME_OPTIONS: [QuestionOption; 3] = [
    QuestionOption {
        label: "Quick",
        sublabel: Some("Under 30 minutes"),
        value: "quick",
    },
    QuestionOption {
        label: "Normal",
        sublabel: Some("30–60 minutes"),
        value: "normal",
    },
    QuestionOption {
        label: "I have time",
        sublabel: Some("No rush at all"),
        value: "any",
    },
];

const PROTEIN_OPTIONS: [QuestionOption; 5] = [
    option("No preference", "any"),
    option("Chicken", "chicken"),
    option("Beef", "beef"),
    option("Seafood", "seafood"),
    option("Vegetarian", "vegetarian"),
];

const TIME: Question = Question {
    key: QuestionKey::Time,
    prompt: "How much time do you have?",
    options: &TIME_OPTIONS,
};

const PROTEIN: Question = Question {
    key: QuestionKey::Protein,
    prompt: "Type of protein?",
    options: &PROTEIN_OPTIONS,
};

static COOK: [Question; 3] = [
    TIME,
    Question {
        key: QuestionKey::Cuisine,
        prompt: "Any cuisine preference?",
        options: &[
            option("No preference", "any"),
            option("Italian", "italian"),
            option("Asian", "asian"),
            option("Mexican", "mexican"),
            option("American", "american"),
        ],
    },
    PROTEIN,
];

static GO_OUT: [Question; 2] = [
    Question {
        key: QuestionKey::Service,
        prompt: "Dining in or ordering out?",
        options: &[
            option("Dine-in", "dineIn"),
            option("Takeout", "takeout"),
            option("Either works", "either"),
        ],
    },
    Question {
        key: QuestionKey::Vibe,
        prompt: "What's the vibe tonight?",
        options: &[
            option("Casual", "casual"),
            option("Fancy", "fancy"),
            option("Fast food", "fastFood"),
            option("Fast casual", "fastCasual"),
        ],
    },
];

static GENERATE: [Question; 3] = [
    TIME,
    Question {
        key: QuestionKey::Cuisine,
        prompt: "Any cuisine preference?",
        options: &[
            option("Whatever works", "any"),
            option("Italian", "italian"),
            option("Asian", "asian"),
            option("Mexican", "mexican"),
            option("American", "american"),
        ],
    },
    PROTEIN,
];

/// Ordered question sequence asked before a mode can suggest anything.
pub fn questions(mode: Mode) -> &'static [Question] {
    match mode {
        Mode::Cook => &COOK,
        Mode::GoOut => &GO_OUT,
        Mode::Generate => &GENERATE,
    }
}
