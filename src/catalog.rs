use std::collections::HashSet;

// Allow-list of every trait a scoring table may reference. Order is the
// canonical presentation order for reports and prompts.
pub const TRAIT_NAMES: &[&str] = &[
    "Logical Thinking",
    "Analytical Abilities",
    "Verbal Skills",
    "Creative Thinking",
    "Learning Speed",
    "Problem-solving Abilities",
    "Critical Thinking",
    "Spatial Reasoning",
    "People Skills",
    "Sports Participation",
    "Physical Activity",
    "Leadership Roles",
    "Teamwork",
    "Clubs/Interest Groups",
    "Technological Affinity",
    "Social Engagement",
    "Volunteering and Social Engagement",
    "Social Responsibility",
    "Awards and Recognitions",
    "Online Certifications",
    "Competitions/Olympiads",
    "Independence",
    "Risk-taking",
    "Communication Skills",
    "Work Ethic",
    "Planning",
    "Discipline",
    "Career Interest Surveys",
    "Digital Footprint",
    "Online Presence",
    "Nature Smartness",
    "Picture Smartness",
    "Music Smartness",
    "Memory Smartness",
    "Adaptability",
    "Resilience",
    "Empathy",
    "Decisiveness",
    "Passive Activity",
    "Grade Trends",
    "Interest in Specific Subjects",
    "Technical Skills",
    "Attention to Detail",
    "Creativity",
    "Artistic Skills",
    "Social Awareness",
    "Leadership",
    "Decision Making",
    "Collaboration",
    "Self-reliance",
    "Math Skills",
    "Writing Skills",
    "Physical Skills",
    "Hand-eye Coordination",
    "Stability Seeking",
    "Financial Management",
    "Solitary Work",
    "Sustainability",
    "Logic",
    "Curiosity",
    "Financial Literacy",
    "Conventional Thinking",
    "Independent Thinking",
    "Science and Research",
    "Public Speaking",
    "Networking",
    "Aesthetic Sense",
    "Market Dynamics",
    "Economics",
    "Artistic Expression",
    "Creative Freedom",
    "Emotional Intelligence",
    "Negotiation",
    "Humanitarian Work",
    "Research Skills",
    "Business Acumen",
    "Service Orientation",
    "Written Communication",
    "Physical Endurance",
    "Machine Learning",
    "Designing",
    "Comfort with Technology",
    "Social Interaction",
    "Confidence",
    "Creative Problem Solving",
    "Future-Oriented Thinking",
    "Listening Skills",
    "Crisis Management",
    "People Management",
    "Arts and Humanities",
    "Athletic Ability",
    "Data Analysis",
    "Mental Stamina",
    "Engineering",
    "Scientific Research",
    "Customer Relations",
    "Human Behavior Analysis",
    "Public Relations",
    "Budgeting Skills",
    "Interpersonal Skills",
    "Innovation",
    "Writing",
    "Entrepreneurial Spirit",
    "Social Skills",
    "Environmental Science",
    "Tradition",
    "Risk Taking",
    "Coding",
    "Technical Accuracy",
    "Precision",
    "Persuasion",
    "Market Analysis",
    "Psychology",
    "Artificial Intelligence",
    "Experimental Thinking",
    "Business",
    "Entrepreneurship",
    "Long-term Planning",
    "Compassion",
    "Big Picture Thinking",
    "Visionary Thinking",
    "Visual Skills",
    "Problem Solving",
];

#[derive(Debug, Clone)]
pub struct TraitCatalog {
    names: &'static [&'static str],
    index: HashSet<&'static str>,
}

pub fn builtin_traits() -> TraitCatalog {
    TraitCatalog::new(TRAIT_NAMES)
}

impl TraitCatalog {
    fn new(names: &'static [&'static str]) -> Self {
        let index = names.iter().copied().collect();
        Self { names, index }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains(name)
    }

    pub fn names(&self) -> &'static [&'static str] {
        self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
