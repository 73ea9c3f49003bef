//! The fixed answer served for every question.

/// A citation in static storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticLink {
    pub url: &'static str,
    pub text: &'static str,
}

/// An answer and its citations in static storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticAnswer {
    pub answer: &'static str,
    pub links: &'static [StaticLink],
}

pub static FIXED_ANSWER: StaticAnswer = StaticAnswer {
    answer: "You must use `gpt-3.5-turbo-0125`, even if the AI Proxy only supports `gpt-4o-mini`. Use the OpenAI API directly for this question.",
    links: &[
        StaticLink {
            url: "https://discourse.onlinedegree.iitm.ac.in/t/ga5-question-8-clarification/155939/4",
            text: "Use the model that’s mentioned in the question.",
        },
        StaticLink {
            url: "https://discourse.onlinedegree.iitm.ac.in/t/ga5-question-8-clarification/155939/3",
            text: "My understanding is that you just have to use a tokenizer, similar to what Prof. Anand used, to get the number of tokens and multiply that by the given rate.",
        },
    ],
};
