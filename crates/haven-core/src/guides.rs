//! Guided learning catalog with derived progress and achievements.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearningModule {
    pub id: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub locked: bool,
    pub points: u32,
    pub icon: char,
}

impl LearningModule {
    fn new(
        id: &str,
        title: &str,
        description: &str,
        completed: bool,
        locked: bool,
        points: u32,
        icon: char,
    ) -> Self {
        Self {
            id: id.to_owned(),
            title: title.to_owned(),
            description: description.to_owned(),
            completed,
            locked,
            points,
            icon,
        }
    }

    /// Status line shown under a module card.
    #[must_use]
    pub fn status_label(&self) -> &'static str {
        if self.locked {
            "Complete previous modules"
        } else if self.completed {
            "Completed ✓"
        } else {
            "Start Module →"
        }
    }
}

/// The fixed module catalog, in display order.
#[must_use]
pub fn default_catalog() -> Vec<LearningModule> {
    vec![
        LearningModule::new(
            "1",
            "Understanding GBV",
            "Learn what constitutes gender-based violence and recognize the signs",
            true,
            false,
            50,
            '✎',
        ),
        LearningModule::new(
            "2",
            "Creating Evidence",
            "How to document and preserve evidence safely",
            true,
            false,
            50,
            '▣',
        ),
        LearningModule::new(
            "3",
            "Immediate Response",
            "What to do immediately after an assault",
            true,
            false,
            50,
            '!',
        ),
        LearningModule::new(
            "4",
            "Medical Care",
            "Where to go for medical attention and what to expect",
            false,
            false,
            75,
            '+',
        ),
        LearningModule::new(
            "5",
            "Legal Rights",
            "Understanding your legal rights and protection orders",
            false,
            false,
            75,
            '§',
        ),
        LearningModule::new(
            "6",
            "Speaking Out",
            "Why silence is dangerous and how to seek help",
            false,
            false,
            100,
            '»',
        ),
        LearningModule::new(
            "7",
            "Support Networks",
            "Building a safety network and finding support",
            false,
            false,
            100,
            '∞',
        ),
        LearningModule::new(
            "8",
            "Safety Planning",
            "Creating an emergency safety plan",
            false,
            true,
            150,
            '◆',
        ),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    Selected,
    Locked,
    Unknown,
}

/// Completed-over-total progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    /// Bar fill in `0.0..=1.0`; an empty catalog reads as zero.
    #[must_use]
    pub fn ratio(self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.completed as f64 / self.total as f64
    }

    #[must_use]
    pub fn label(self) -> String {
        format!("{}/{} Modules", self.completed, self.total)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub title: &'static str,
    pub glyph: char,
    pub earned: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuideCatalog {
    modules: Vec<LearningModule>,
    selected: Option<String>,
}

impl GuideCatalog {
    #[must_use]
    pub fn new(modules: Vec<LearningModule>) -> Self {
        Self {
            modules,
            selected: None,
        }
    }

    #[must_use]
    pub fn modules(&self) -> &[LearningModule] {
        &self.modules
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.modules.iter().filter(|module| module.completed).count()
    }

    /// Running point total: the sum of completed modules' points.
    #[must_use]
    pub fn total_points(&self) -> u32 {
        self.modules
            .iter()
            .filter(|module| module.completed)
            .map(|module| module.points)
            .sum()
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress {
            completed: self.completed_count(),
            total: self.modules.len(),
        }
    }

    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Select an unlocked module. Locked and unknown ids change nothing.
    pub fn select(&mut self, id: &str) -> SelectOutcome {
        match self.modules.iter().find(|module| module.id == id) {
            None => SelectOutcome::Unknown,
            Some(module) if module.locked => SelectOutcome::Locked,
            Some(_) => {
                self.selected = Some(id.to_owned());
                SelectOutcome::Selected
            }
        }
    }

    /// Badges derived from completion: First Steps at one module, Knowledge
    /// at three, Master when every module is done.
    #[must_use]
    pub fn achievements(&self) -> [Achievement; 3] {
        let done = self.completed_count();
        let total = self.modules.len();
        [
            Achievement {
                title: "First Steps",
                glyph: '★',
                earned: done >= 1,
            },
            Achievement {
                title: "Knowledge",
                glyph: '✦',
                earned: done >= 3,
            },
            Achievement {
                title: "Master",
                glyph: '♛',
                earned: total > 0 && done == total,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_labels() {
        let catalog = default_catalog();
        assert_eq!(catalog[0].status_label(), "Completed ✓");
        assert_eq!(catalog[3].status_label(), "Start Module →");
        assert_eq!(catalog[7].status_label(), "Complete previous modules");
    }

    #[test]
    fn empty_catalog_progress_is_zero() {
        let catalog = GuideCatalog::default();
        assert_eq!(catalog.progress().ratio(), 0.0);
        assert_eq!(catalog.total_points(), 0);
        assert!(!catalog.achievements()[2].earned);
    }

    #[test]
    fn default_achievements() {
        let catalog = GuideCatalog::new(default_catalog());
        let earned: Vec<bool> = catalog.achievements().iter().map(|a| a.earned).collect();
        assert_eq!(earned, vec![true, true, false]);
    }

    #[test]
    fn select_unlocked_module() {
        let mut catalog = GuideCatalog::new(default_catalog());
        assert_eq!(catalog.select("4"), SelectOutcome::Selected);
        assert_eq!(catalog.selected(), Some("4"));
        assert_eq!(catalog.select("42"), SelectOutcome::Unknown);
        assert_eq!(catalog.selected(), Some("4"));
    }

    #[test]
    fn master_earned_when_all_done() {
        let modules: Vec<LearningModule> = default_catalog()
            .into_iter()
            .map(|mut module| {
                module.completed = true;
                module
            })
            .collect();
        let catalog = GuideCatalog::new(modules);
        assert!(catalog.achievements().iter().all(|a| a.earned));
        assert_eq!(catalog.progress().ratio(), 1.0);
    }
}
