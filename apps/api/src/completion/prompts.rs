// Prompt constants and message building for the tailoring call.
//
// The template text is the contract with the completion service: changing
// a word changes observable output. Reproduce it verbatim.

use crate::completion::ChatMessage;

/// System instruction enumerating the required output contract.
pub const TAILOR_SYSTEM_PROMPT: &str = r#"You are a professional resume optimization assistant. Your task is to tailor a user's resume to a given job description.

Guidelines:
- Output MUST be in clean Markdown format.
- Include ONLY the following sections: SUMMARY, SKILLS, PROFESSIONAL EXPERIENCE, PROJECTS, EDUCATION.
- Absolutely DO NOT include any other sections, such as 'ADDITIONAL INFORMATION', 'CONTACT', 'CERTIFICATIONS', or any introductory/concluding conversational text.
- Focus on aligning keywords and phrases from the job description with the resume content.
- Wherever possible, enhance existing bullet points or create new ones by adding quantifiable metrics and achievements (e.g., "Increased sales by 20%", "Reduced costs by $10K"). Use numbers and percentages from the original resume or infer them if contextually appropriate.
- Maintain the overall structure and flow of the original resume as much as possible, only modifying content to match the job description and inject metrics.
- Ensure conciseness and impactful language."#;

/// User message template. Replace `{resume}` and `{job_description}` before sending.
pub const TAILOR_USER_TEMPLATE: &str = r#"Here is my original resume:
{resume}

Here is the job description:
{job_description}

Provide the tailored resume in Markdown, strictly following all the guidelines."#;

/// Builds the ordered system + user message pair for one tailoring request.
/// Both inputs are embedded verbatim.
pub fn build_tailor_messages(resume: &str, job_description: &str) -> Vec<ChatMessage> {
    let user_content = TAILOR_USER_TEMPLATE
        .replace("{resume}", resume)
        .replace("{job_description}", job_description);

    vec![
        ChatMessage {
            role: "system".to_string(),
            content: TAILOR_SYSTEM_PROMPT.to_string(),
        },
        ChatMessage {
            role: "user".to_string(),
            content: user_content,
        },
    ]
}
