/// Fraction of an element that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Observer root margin; reveals trigger 50px before the bottom edge.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
/// Class added to an element once it scrolls into view.
pub const REVEAL_CLASS: &str = "fade-in";

/// Page elements that fade in on first intersection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealKind {
    TimelineItem,
    CertificateCard,
    ProjectCard,
    AboutContent,
    SkillItem,
}

impl RevealKind {
    pub const ALL: [RevealKind; 5] = [
        RevealKind::TimelineItem,
        RevealKind::CertificateCard,
        RevealKind::ProjectCard,
        RevealKind::AboutContent,
        RevealKind::SkillItem,
    ];

    pub fn class_name(self) -> &'static str {
        match self {
            RevealKind::TimelineItem => "timeline-item",
            RevealKind::CertificateCard => "certificate-card",
            RevealKind::ProjectCard => "project-card",
            RevealKind::AboutContent => "about-content",
            RevealKind::SkillItem => "skill-item",
        }
    }

    pub fn from_class(class: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.class_name() == class)
    }

    /// First recognised role in a whitespace-separated class list.
    pub fn from_class_list(classes: &str) -> Option<Self> {
        classes.split_whitespace().find_map(Self::from_class)
    }

    /// Selector matching every observed element.
    pub fn selector() -> String {
        Self::ALL
            .iter()
            .map(|k| format!(".{}", k.class_name()))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Animation delay in seconds for an element at `index` among its
    /// siblings, or `None` when the role has no stagger.
    pub fn animation_delay(self, index: usize) -> Option<f32> {
        match self {
            RevealKind::TimelineItem => Some(0.2),
            RevealKind::CertificateCard => Some(index as f32 * 0.1),
            RevealKind::ProjectCard => Some(index as f32 * 0.2),
            RevealKind::AboutContent | RevealKind::SkillItem => None,
        }
    }

    /// The delay formatted as a CSS `animation-delay` value.
    pub fn css_delay(self, index: usize) -> Option<String> {
        self.animation_delay(index).map(|s| format!("{}s", s))
    }
}
