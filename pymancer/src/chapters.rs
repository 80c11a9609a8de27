//! Built-in exercise catalog
//!
//! Each chapter is a spell with blanks. The student picks a token for every
//! blank; the chapter passes when the filled spell runs cleanly and its output
//! satisfies the chapter's acceptance rule.

use pymancer_interpreter::{Evaluation, ExecutionResult, Interpreter, InterpreterConfig};
use pymancer_parser::DEFAULT_PLACEHOLDER;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        };
        f.write_str(name)
    }
}

/// Acceptance rule over a run's output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acceptance {
    OutputContains(&'static str),
    /// `needle` must appear at least `times` times
    OutputRepeats { needle: &'static str, times: usize },
}

impl Acceptance {
    pub fn accepts(&self, _code: &str, output: &str) -> bool {
        match *self {
            Acceptance::OutputContains(needle) => output.contains(needle),
            Acceptance::OutputRepeats { needle, times } => output.matches(needle).count() >= times,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    pub id: u32,
    pub title: &'static str,
    pub difficulty: Difficulty,
    pub story: &'static str,
    pub task: &'static str,
    pub hint: &'static str,
    pub starter_code: &'static str,
    /// Token choices offered for the blanks, correct and distracting alike
    pub tokens: &'static [&'static str],
    pub acceptance: Acceptance,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChapterError {
    #[error("No chapter with id {id}; run `pymancer chapters` to list them")]
    UnknownChapter { id: u32 },

    #[error("{remaining} blank(s) still unfilled; pass one --token per blank")]
    UnfilledBlanks { remaining: usize },

    #[error("The spell has {blanks} blank(s) but {given} tokens were given")]
    TooManyTokens { blanks: usize, given: usize },
}

/// A chapter run against the student's tokens
#[derive(Debug, Clone, PartialEq)]
pub struct Attempt {
    pub code: String,
    pub evaluation: Evaluation,
    pub passed: bool,
}

impl Attempt {
    pub fn result(&self) -> ExecutionResult {
        self.evaluation.clone().into()
    }
}

impl Chapter {
    /// Number of blanks in the starter code
    ///
    /// Starter code always marks blanks with `???`, whatever placeholder the
    /// interpreter is configured to reject.
    pub fn blanks(&self) -> usize {
        self.starter_code.matches(BLANK).count()
    }

    /// Fill the blanks with `tokens` and run the spell
    ///
    /// A spell that still has blanks is refused rather than run. `config`
    /// only governs the run of the filled spell.
    pub fn attempt(
        &self,
        tokens: &[String],
        config: &InterpreterConfig,
    ) -> Result<Attempt, ChapterError> {
        let blanks = self.blanks();
        if tokens.len() > blanks {
            return Err(ChapterError::TooManyTokens {
                blanks,
                given: tokens.len(),
            });
        }

        let code = fill_placeholders(self.starter_code, BLANK, tokens);
        if tokens.len() < blanks {
            return Err(ChapterError::UnfilledBlanks {
                remaining: blanks - tokens.len(),
            });
        }

        let evaluation = Interpreter::new(config.clone()).evaluate(&code);
        let passed = evaluation.is_success() && self.acceptance.accepts(&code, &evaluation.output);
        tracing::debug!(chapter = self.id, passed, "chapter attempt");

        Ok(Attempt {
            code,
            evaluation,
            passed,
        })
    }
}

/// Marker for a blank in starter code
pub const BLANK: &str = DEFAULT_PLACEHOLDER;

/// Replace the first remaining marker with each token in turn
pub fn fill_placeholders(code: &str, marker: &str, tokens: &[String]) -> String {
    tokens
        .iter()
        .fold(code.to_string(), |filled, token| filled.replacen(marker, token, 1))
}

pub fn find_chapter(id: u32) -> Result<&'static Chapter, ChapterError> {
    CHAPTERS
        .iter()
        .find(|chapter| chapter.id == id)
        .ok_or(ChapterError::UnknownChapter { id })
}

pub static CHAPTERS: &[Chapter] = &[
    Chapter {
        id: 1,
        title: "The Sealed Gates",
        difficulty: Difficulty::Beginner,
        story: "The ancient library of Pythonia is sealed by a logical gate. To enter, you must define the entry 'status' as 'authorized'.",
        task: "Complete the code to set the status variable to the string 'authorized'.",
        hint: "Use quotes for strings: status = 'authorized'",
        starter_code: "# Define entry status\nstatus = ???\n\nif status == 'authorized':\n    print('The gate glows blue and swings open.')",
        tokens: &["'locked'", "'authorized'", "True", "False"],
        acceptance: Acceptance::OutputContains("swings open"),
    },
    Chapter {
        id: 2,
        title: "The Mana Well",
        difficulty: Difficulty::Beginner,
        story: "The well is dry. It requires a specific amount of mana to activate. Set the 'mana_level' to exactly 100.",
        task: "Assign the integer 100 to the variable mana_level.",
        hint: "Numbers don't need quotes: mana_level = 100",
        starter_code: "mana_level = ???\n\nif mana_level == 100:\n    print('Pure arcane water gushes forth!')",
        tokens: &["50", "100", "'100'", "0"],
        acceptance: Acceptance::OutputContains("water gushes forth"),
    },
    Chapter {
        id: 3,
        title: "The Gargoyle Orbs",
        difficulty: Difficulty::Intermediate,
        story: "Two stone gargoyles guard the hall. Only if both 'left_orb' and 'right_orb' are set to True will the path clear.",
        task: "Use Boolean values to activate both orbs.",
        hint: "In Python, booleans are True and False (Case Sensitive).",
        starter_code: "left_orb = ???\nright_orb = ???\n\nif left_orb and right_orb:\n    print('The path is clear.')",
        tokens: &["True", "False", "'True'", "1"],
        acceptance: Acceptance::OutputContains("path is clear"),
    },
    Chapter {
        id: 4,
        title: "Brewing Clarity",
        difficulty: Difficulty::Intermediate,
        story: "Your potion is almost complete. You must append 'Moonlight' to the 'ingredients' list.",
        task: "Use the .append() method to add 'Moonlight' to the ingredients.",
        hint: "Methods are called with dots: list.append('item')",
        starter_code: "ingredients = ['Sage', 'Water']\ningredients.???('Moonlight')\n\nif 'Moonlight' in ingredients:\n    print('The brew sparkles with silver light.')",
        tokens: &["push", "append", "add", "insert"],
        acceptance: Acceptance::OutputContains("sparkles with silver light"),
    },
    Chapter {
        id: 5,
        title: "The Hydra's Trial",
        difficulty: Difficulty::Advanced,
        story: "The Hydra has multiple heads. You must strike each one in sequence using a loop.",
        task: "Use a for loop to iterate through the heads and print 'Strike!'.",
        hint: "The syntax is: for item in list:",
        starter_code: "heads = ['Alpha', 'Beta', 'Gamma']\n??? head in heads:\n    print('Strike!')",
        tokens: &["while", "for", "if", "each"],
        acceptance: Acceptance::OutputRepeats {
            needle: "Strike!",
            times: 3,
        },
    },
    Chapter {
        id: 6,
        title: "The Oracle's Count",
        difficulty: Difficulty::Advanced,
        story: "The Oracle demands to know how many souls reside in the Hall. You must calculate the length of the 'souls' list.",
        task: "Use the len() function to get the count of souls.",
        hint: "len(list_name) returns the number of items.",
        starter_code: "souls = ['Merlin', 'Arthur', 'Gwen']\ncount = ???(souls)\n\nif count == 3:\n    print('The Oracle nods in approval.')",
        tokens: &["size", "count", "len", "length"],
        acceptance: Acceptance::OutputContains("approval"),
    },
];
