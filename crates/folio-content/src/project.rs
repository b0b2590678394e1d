//! Project - the portfolio gallery table

use serde::Serialize;

/// One gallery record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Project {
    /// Display title
    pub title: &'static str,
    /// Live site
    pub url: &'static str,
    /// Grouping key for filtering (lowercase)
    pub category: &'static str,
    /// One-line description
    pub description: &'static str,
    /// Technologies, most significant first
    pub tech: &'static [&'static str],
    /// Company the work was delivered under
    pub company: &'static str,
    /// Delivery year
    pub year: &'static str,
}

const fn project(
    title: &'static str,
    url: &'static str,
    category: &'static str,
    description: &'static str,
    tech: &'static [&'static str],
    company: &'static str,
    year: &'static str,
) -> Project {
    Project { title, url, category, description, tech, company, year }
}

const GREENBEAR: &str = "Greenbear Technologies";
const OHMSPACE: &str = "Ohmspace Technologies";

static PROJECTS: [Project; 11] = [
    project(
        "Villa Leone Nairobi",
        "https://villaleonenairobi.com/",
        "hospitality",
        "Hotel management site with elegant UI and booking system",
        &["Django", "Tailwind CSS"],
        GREENBEAR,
        "2023",
    ),
    project(
        "Rental Pay",
        "https://rentalpay.africa/",
        "fintech",
        "Rental management platform with M-PESA to bank integration",
        &["Django", "M-PESA API", "PostgreSQL"],
        GREENBEAR,
        "2023",
    ),
    project(
        "ETCO Advocates",
        "https://etcoadvocates.com/",
        "legal",
        "Law firm booking and client portal system",
        &["Django", "Tailwind CSS"],
        GREENBEAR,
        "2024",
    ),
    project(
        "Credit Scoring Model",
        "https://credit-scoring-model-eight.vercel.app/",
        "fintech",
        "Loan creditworthiness assessment system",
        &["React.js", "ML Integration"],
        GREENBEAR,
        "2024",
    ),
    project(
        "GBT Kenya",
        "https://gbt.co.ke/",
        "corporate",
        "Software development company website",
        &["React.js", "Tailwind CSS"],
        GREENBEAR,
        "2023",
    ),
    project(
        "Tirus & Esther Foundation",
        "https://tirusandestherfoundation.org/",
        "ngo",
        "NGO platform for community outreach",
        &["React.js", "Django"],
        OHMSPACE,
        "2023",
    ),
    project(
        "Jay B Events",
        "https://jay-b-events.vercel.app/",
        "events",
        "Event management and booking website",
        &["React.js", "Tailwind CSS"],
        OHMSPACE,
        "2024",
    ),
    project(
        "Zippy Okoth",
        "https://zippy-okoth.vercel.app/",
        "personal",
        "Artist and educator personal portfolio site",
        &["React.js", "Tailwind CSS"],
        OHMSPACE,
        "2024",
    ),
    project(
        "Firmcop",
        "https://firmcop.vercel.app/",
        "corporate",
        "Industrial and commercial solutions provider",
        &["React.js", "Tailwind CSS"],
        OHMSPACE,
        "2024",
    ),
    project(
        "Bubbly Investment",
        "https://bubbly-investment.vercel.app/",
        "logistics",
        "Industrial containers, chemicals, pallets, and logistics solutions",
        &["React.js", "Tailwind CSS"],
        OHMSPACE,
        "2024",
    ),
    project(
        "BIB Visualz",
        "https://bibvisualz.com/",
        "branding",
        "Branding and print services platform",
        &["React.js", "Tailwind CSS"],
        OHMSPACE,
        "2024",
    ),
];

/// Gallery records in display order
#[inline]
#[must_use]
pub fn projects() -> &'static [Project] {
    &PROJECTS
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn table_serializes_with_stable_keys() {
        let value = serde_json::to_value(projects()[1]).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "title": "Rental Pay",
                "url": "https://rentalpay.africa/",
                "category": "fintech",
                "description": "Rental management platform with M-PESA to bank integration",
                "tech": ["Django", "M-PESA API", "PostgreSQL"],
                "company": "Greenbear Technologies",
                "year": "2023"
            })
        );
    }

    #[test]
    fn every_project_has_tech() {
        assert!(projects().iter().all(|p| !p.tech.is_empty()));
        assert!(projects().iter().all(|p| p.category == p.category.to_lowercase()));
    }
}
