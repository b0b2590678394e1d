//! Faq - accordion entries

use serde::Serialize;

/// Question/answer pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Faq {
    /// Question text
    pub question: &'static str,
    /// Answer text
    pub answer: &'static str,
}

static FAQS: [Faq; 4] = [
    Faq {
        question: "What is your main technology stack?",
        answer: "My core expertise lies in the Python/Django ecosystem for the backend, coupled \
                 with React.js, React Native, and Tailwind CSS for robust, modern, and highly \
                 responsive frontend development.",
    },
    Faq {
        question: "How do you ensure project success and quality?",
        answer: "I follow Agile/Scrum methodologies, emphasizing clean, well-documented code, \
                 strict version control (Git/GitHub), unit testing, and continuous deployment \
                 practices to ensure high-quality, scalable applications are delivered on time.",
    },
    Faq {
        question: "What types of industries have you worked with?",
        answer: "I have delivered custom solutions for a diverse range of clients, including \
                 e-commerce platforms, law firms (client portals), NGOs, real estate companies, \
                 event management businesses, and industrial solutions providers.",
    },
    Faq {
        question: "Are your solutions mobile-friendly and responsive?",
        answer: "Absolutely. Using frameworks like React Native and utility-first CSS like \
                 Tailwind, all solutions are designed to be fully responsive and optimized for \
                 performance across mobile, tablet, and desktop devices.",
    },
];

/// Accordion entries in display order
#[inline]
#[must_use]
pub fn faqs() -> &'static [Faq] {
    &FAQS
}
