//! Profile - bio, skills, experience and education

use serde::Serialize;

/// Personal profile shown across the page
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    /// Full name
    pub name: &'static str,
    /// Headline title
    pub title: &'static str,
    /// Contact details
    pub contact: Contact,
    /// Summary paragraph
    pub summary: &'static str,
    /// Skill areas, rendered as staggered cards
    pub skills: &'static [SkillArea],
    /// Work history, newest first
    pub experience: &'static [Job],
    /// Education highlight
    pub education: Education,
}

/// Contact block
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Contact {
    /// Email address
    pub email: &'static str,
    /// Display phone number
    pub phone: &'static str,
    /// City and country
    pub location: &'static str,
}

/// One skill area card
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SkillArea {
    /// Domain heading
    pub domain: &'static str,
    /// Tools within the domain
    pub tools: &'static str,
}

/// One position in the work history
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Job {
    /// Employer
    pub company: &'static str,
    /// Role title
    pub role: &'static str,
    /// Human-readable date range
    pub duration: &'static str,
    /// What the role involved
    pub description: &'static str,
    /// Notable client projects
    pub projects: &'static [JobProject],
}

/// A client project listed under a job
#[derive(Debug, Clone, Copy, Serialize)]
pub struct JobProject {
    /// Project name
    pub name: &'static str,
    /// Live site
    pub url: &'static str,
    /// Short stack / purpose line
    pub tech: &'static str,
}

/// Education highlight
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Education {
    /// Institution name
    pub institution: &'static str,
    /// Degree title
    pub degree: &'static str,
    /// Years attended
    pub years: &'static str,
}

static SKILLS: [SkillArea; 4] = [
    SkillArea {
        domain: "Backend / Server",
        tools: "Python, Django, Django REST Framework, PostgreSQL, MySQL",
    },
    SkillArea {
        domain: "Frontend",
        tools: "JavaScript/ES6+, React.js, React Native, Tailwind CSS, Bootstrap",
    },
    SkillArea {
        domain: "APIs & Integration",
        tools: "RESTful API design, authentication, third-party APIs",
    },
    SkillArea {
        domain: "Best Practices",
        tools: "Clean code, unit testing, version control, security, agile / Scrum",
    },
];

static GREENBEAR_PROJECTS: [JobProject; 5] = [
    JobProject {
        name: "Villa Leone Nairobi",
        url: "https://villaleonenairobi.com/",
        tech: "Hotel management site (Django + Tailwind CSS)",
    },
    JobProject {
        name: "Rental Pay",
        url: "https://rentalpay.africa/",
        tech: "Rental management platform with M-PESA to bank integration.",
    },
    JobProject {
        name: "ETCO Advocates",
        url: "https://etcoadvocates.com/",
        tech: "Law firm booking and client portal (Django + Tailwind CSS).",
    },
    JobProject {
        name: "Credit Scoring Model",
        url: "https://credit-scoring-model-eight.vercel.app/",
        tech: "Loan creditworthiness assessment system.",
    },
    JobProject {
        name: "GBT Kenya",
        url: "https://gbt.co.ke/",
        tech: "Software development company site.",
    },
];

static OHMSPACE_PROJECTS: [JobProject; 4] = [
    JobProject {
        name: "Tirus & Esther Foundation",
        url: "https://tirusandestherfoundation.org/",
        tech: "NGO platform",
    },
    JobProject {
        name: "Jay B Events",
        url: "https://jay-b-events.vercel.app/",
        tech: "Event management website",
    },
    JobProject {
        name: "Zippy Okoth",
        url: "https://zippy-okoth.vercel.app/",
        tech: "Artist/educator personal site",
    },
    JobProject {
        name: "Firmcop",
        url: "https://firmcop.vercel.app/",
        tech: "Industrial and commercial solutions provider",
    },
];

static EXPERIENCE: [Job; 2] = [
    Job {
        company: "Greenbear Technologies",
        role: "Full Stack Developer",
        duration: "May 2023 - Present",
        description: "Designed and deployed responsive websites and web applications tailored to \
                      client needs. Delivered projects end-to-end including UI design, backend \
                      architecture, database modeling, and API integrations.",
        projects: &GREENBEAR_PROJECTS,
    },
    Job {
        company: "Ohmspace Technologies",
        role: "Founder & Lead Developer",
        duration: "Jan 2021 - May 2023",
        description: "Built and deployed custom websites and applications for SMEs, NGOs, and \
                      event companies. Provided additional services including digital marketing, \
                      bulk SMS & emails, and hosting.",
        projects: &OHMSPACE_PROJECTS,
    },
];

static PROFILE: Profile = Profile {
    name: "SIMEON MWANGI",
    title: "Full Stack Web Developer | Software Engineer",
    contact: Contact {
        email: "msimeon937@gmail.com",
        phone: "+254-704662432",
        location: "Nairobi-Kenya",
    },
    summary: "Innovative Software Engineer with over 3 years of experience in full-stack web \
              development. Skilled in building scalable and user-friendly applications using \
              React.js, Django, and modern frontend frameworks. Proven track record delivering \
              custom solutions for businesses, NGOs, law firms, e-commerce platforms, and real \
              estate companies.",
    skills: &SKILLS,
    experience: &EXPERIENCE,
    education: Education {
        institution: "Murang'a University of Technology",
        degree: "Bachelor of Science in Mathematics & Computer Science",
        years: "2017-2021",
    },
};

/// The page owner's profile
#[inline]
#[must_use]
pub fn profile() -> &'static Profile {
    &PROFILE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn experience_lists_client_projects() {
        let total: usize = profile().experience.iter().map(|j| j.projects.len()).sum();
        assert_eq!(total, 9);
        assert!(profile()
            .experience
            .iter()
            .flat_map(|j| j.projects)
            .all(|p| p.url.starts_with("https://")));
    }

    #[test]
    fn four_skill_cards() {
        assert_eq!(profile().skills.len(), 4);
    }
}
