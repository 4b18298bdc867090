//! Navigation mapping and active-section tracking.
//!
//! DESIGN
//! ======
//! The label/id table is fixed. The tracker keeps the latest visibility of
//! every observed section, because an intersection callback only reports
//! the sections whose ratio crossed a threshold.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Page sections reachable from the navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Projects,
    Skills,
    Services,
    Testimonials,
    Blog,
    Contact,
}

impl Section {
    /// Navigation order.
    pub const ALL: [Section; 8] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Skills,
        Section::Services,
        Section::Testimonials,
        Section::Blog,
        Section::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Skills => "Skills",
            Self::Services => "Services",
            Self::Testimonials => "Testimonials",
            Self::Blog => "Blog",
            Self::Contact => "Contact",
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Services => "services",
            Self::Testimonials => "testimonials",
            Self::Blog => "blog",
            Self::Contact => "contact",
        }
    }

    /// Match a nav entry's visible text; surrounding whitespace is ignored.
    pub fn from_label(text: &str) -> Option<Self> {
        let text = text.trim();
        Self::ALL.into_iter().find(|s| s.label() == text)
    }

    #[cfg(test)]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

/// Whether a nav entry for `entry` carries the active marker.
pub fn is_entry_active(entry: Option<Section>, active_id: Option<&str>) -> bool {
    match (entry, active_id) {
        (Some(section), Some(id)) => section.id() == id,
        _ => false,
    }
}

#[derive(Clone, Debug, PartialEq)]
struct SectionVisibility {
    id: String,
    intersecting: bool,
    ratio: f64,
}

/// Picks the most visible section among those observed.
#[derive(Clone, Debug)]
pub struct ActiveSectionTracker {
    threshold: f64,
    sections: Vec<SectionVisibility>,
}

impl ActiveSectionTracker {
    /// `ids` in document order; that order breaks ties.
    pub fn new<I, S>(threshold: f64, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sections = ids
            .into_iter()
            .map(|id| SectionVisibility { id: id.into(), intersecting: false, ratio: 0.0 })
            .collect();
        Self { threshold, sections }
    }

    /// Record one intersection report. Unknown ids are appended.
    pub fn record(&mut self, id: &str, intersecting: bool, ratio: f64) {
        if let Some(entry) = self.sections.iter_mut().find(|s| s.id == id) {
            entry.intersecting = intersecting;
            entry.ratio = ratio;
        } else {
            self.sections.push(SectionVisibility { id: id.to_owned(), intersecting, ratio });
        }
    }

    /// Id of the intersecting section with the largest ratio at or above
    /// the threshold. Ties keep the earliest section.
    pub fn most_visible(&self) -> Option<&str> {
        let mut best: Option<&SectionVisibility> = None;
        for entry in &self.sections {
            if !entry.intersecting || entry.ratio < self.threshold {
                continue;
            }
            if best.is_none_or(|b| entry.ratio > b.ratio) {
                best = Some(entry);
            }
        }
        best.map(|s| s.id.as_str())
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
