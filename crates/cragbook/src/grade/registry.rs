use std::collections::HashMap;
use std::sync::LazyLock;

use super::category::Category;
use super::scale::{DifficultyScale, builtin_scales};
use super::system::GradingSystem;
use crate::config::scale::SCALE_LEN;
use crate::error::{Error, Result};

static STANDARD: LazyLock<GradeRegistry> = LazyLock::new(|| {
    GradeRegistry::from_scales(builtin_scales()).expect("built-in grade scales are consistent")
});

/// Why a grade was passed through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnchangedReason {
    /// The grade is not a label of any scale in the category
    UnrecognizedGrade,
    /// The target system does not belong to the category
    UnknownSystem,
}

/// Outcome of a grade conversion.
///
/// Misses are never errors: the original label is kept so that callers
/// always have something to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion<'a> {
    Converted {
        grade: &'static str,
        /// System the input grade was found in
        from: GradingSystem,
        /// Normalized difficulty (0 = easiest)
        index: usize,
    },
    Unchanged {
        original: &'a str,
        reason: UnchangedReason,
    },
}

impl<'a> Conversion<'a> {
    /// Converted label, or the original input on a miss.
    pub fn as_str(&self) -> &'a str {
        match *self {
            Self::Converted { grade, .. } => grade,
            Self::Unchanged { original, .. } => original,
        }
    }

    pub fn is_converted(&self) -> bool {
        matches!(self, Self::Converted { .. })
    }

    pub fn index(&self) -> Option<usize> {
        match *self {
            Self::Converted { index, .. } => Some(index),
            Self::Unchanged { .. } => None,
        }
    }
}

impl std::fmt::Display for Conversion<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Difficulty scales for every grading system, grouped by category.
#[derive(Debug, Clone)]
pub struct GradeRegistry {
    boulder: Vec<DifficultyScale>,
    rope: Vec<DifficultyScale>,
}

impl GradeRegistry {
    /// Shared registry over the built-in scales.
    pub fn standard() -> &'static GradeRegistry {
        &STANDARD
    }

    /// Build a registry, validating the scale tables.
    ///
    /// Every system of every category needs exactly one scale of
    /// `SCALE_LEN` labels, and no label may appear twice within a category.
    /// Scales are searched in `Category::systems()` order regardless of the
    /// order they are given in.
    pub fn from_scales<I>(scales: I) -> Result<Self>
    where
        I: IntoIterator<Item = DifficultyScale>,
    {
        let mut by_system: HashMap<GradingSystem, DifficultyScale> = HashMap::new();
        for scale in scales {
            if scale.len() != SCALE_LEN {
                return Err(Error::ScaleLength {
                    system: scale.system(),
                    expected: SCALE_LEN,
                    actual: scale.len(),
                });
            }
            let system = scale.system();
            if by_system.insert(system, scale).is_some() {
                return Err(Error::DuplicateSystem(system));
            }
        }

        let mut group = |category: Category| -> Result<Vec<DifficultyScale>> {
            let mut seen: HashMap<&'static str, GradingSystem> = HashMap::new();
            let mut scales = Vec::with_capacity(category.systems().len());
            for &system in category.systems() {
                let scale = by_system
                    .remove(&system)
                    .ok_or(Error::MissingScale(system))?;
                for &label in scale.labels() {
                    if let Some(&first) = seen.get(label) {
                        return Err(Error::DuplicateLabel {
                            label: label.to_string(),
                            first,
                            second: system,
                        });
                    }
                    seen.insert(label, system);
                }
                scales.push(scale);
            }
            Ok(scales)
        };

        let boulder = group(Category::Boulder)?;
        let rope = group(Category::Rope)?;
        Ok(Self { boulder, rope })
    }

    /// Scales of a category, in search order.
    pub fn scales(&self, category: Category) -> &[DifficultyScale] {
        match category {
            Category::Boulder => &self.boulder,
            Category::Rope => &self.rope,
        }
    }

    pub fn scale(&self, system: GradingSystem) -> Option<&DifficultyScale> {
        self.scales(system.category())
            .iter()
            .find(|scale| scale.system() == system)
    }

    /// Label at a normalized index in `system`.
    pub fn label(&self, system: GradingSystem, index: usize) -> Option<&'static str> {
        self.scale(system)?.label_at(index)
    }

    /// First scale (in search order) containing `grade`, with its index.
    fn locate(&self, grade: &str, category: Category) -> Option<(GradingSystem, usize)> {
        self.scales(category)
            .iter()
            .find_map(|scale| scale.index_of(grade).map(|index| (scale.system(), index)))
    }

    /// Normalized difficulty of a grade within its category (0 = easiest).
    pub fn difficulty_index(&self, grade: &str, category: Category) -> Option<usize> {
        self.locate(grade, category).map(|(_, index)| index)
    }

    /// System a grade label belongs to.
    pub fn source_system(&self, grade: &str, category: Category) -> Option<GradingSystem> {
        self.locate(grade, category).map(|(system, _)| system)
    }

    /// Convert a grade into `target`, searching the target's category.
    pub fn convert<'a>(&self, grade: &'a str, target: GradingSystem) -> Conversion<'a> {
        let Some((from, index)) = self.locate(grade, target.category()) else {
            return Conversion::Unchanged {
                original: grade,
                reason: UnchangedReason::UnrecognizedGrade,
            };
        };
        match self.label(target, index) {
            Some(label) => Conversion::Converted {
                grade: label,
                from,
                index,
            },
            None => Conversion::Unchanged {
                original: grade,
                reason: UnchangedReason::UnknownSystem,
            },
        }
    }

    /// Convert with a loosely-typed target system name.
    ///
    /// `target_name` must be an exact system name of `category` ("V-Scale",
    /// "Font", "YDS", "French", "UIAA"); anything else leaves the grade
    /// unchanged instead of failing.
    pub fn convert_in<'a>(
        &self,
        grade: &'a str,
        category: Category,
        target_name: &str,
    ) -> Conversion<'a> {
        if self.locate(grade, category).is_none() {
            return Conversion::Unchanged {
                original: grade,
                reason: UnchangedReason::UnrecognizedGrade,
            };
        }
        let target = category
            .systems()
            .iter()
            .find(|system| system.name() == target_name);
        match target {
            Some(&target) => self.convert(grade, target),
            None => Conversion::Unchanged {
                original: grade,
                reason: UnchangedReason::UnknownSystem,
            },
        }
    }

    /// Display string for a grade in `target_name`; the input on any miss.
    pub fn convert_display(&self, grade: &str, category: Category, target_name: &str) -> String {
        self.convert_in(grade, category, target_name)
            .as_str()
            .to_string()
    }
}
