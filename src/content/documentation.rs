//! Documentation Content

/// Card heading
pub const TITLE: &str = "Climate Engineering Documentation";

/// A heading and its paragraph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocSection {
    pub heading: &'static str,
    pub body: &'static str,
}

pub const SECTIONS: [DocSection; 3] = [
    DocSection {
        heading: "Overview",
        body: "This dashboard provides insights into various climate engineering initiatives and their impacts on global climate patterns.",
    },
    DocSection {
        heading: "Data Sources",
        body: "Our data is collected from multiple reliable sources including satellite measurements, ground stations, and atmospheric sensors.",
    },
    DocSection {
        heading: "Methodology",
        body: "We analyze climate data using state-of-the-art models and visualization techniques to provide actionable insights.",
    },
];
