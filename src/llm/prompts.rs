//! Prompt templates for cover letter generation

/// Token the model sometimes leaves where the applicant's name belongs.
pub const NAME_PLACEHOLDER: &str = "[Your Name]";

/// Prompt templates for the cover letter writer persona.
#[derive(Debug, Clone)]
pub struct PromptTemplates {
    pub system: String,
    pub user: String,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            system: SYSTEM_PROMPT_TEMPLATE.to_string(),
            user: USER_PROMPT_TEMPLATE.to_string(),
        }
    }
}

/// Parameters for prompt template substitution
#[derive(Debug, Clone)]
pub struct PromptParams<'a> {
    pub applicant_name: &'a str,
    pub job_title: &'a str,
    pub company: &'a str,
    pub description: &'a str,
    pub resume_text: &'a str,
    pub base_cover_letter_text: &'a str,
}

impl PromptTemplates {
    pub fn render_system(&self, applicant_name: &str) -> String {
        self.system.replace("{name}", applicant_name)
    }

    pub fn render_user(&self, params: &PromptParams) -> String {
        self.user
            .replace("{title}", params.job_title)
            .replace("{company}", params.company)
            .replace("{description}", params.description)
            .replace("{resume}", params.resume_text)
            .replace("{base_cover_letter}", params.base_cover_letter_text)
            .replace("{name}", params.applicant_name)
    }
}

const SYSTEM_PROMPT_TEMPLATE: &str = r#"You are an expert cover letter writer with a specialty in tech industry applications. Your task is to create a highly personalized cover letter for {name}.

IMPORTANT GUIDELINES:
1. ONLY mention experiences that are explicitly mentioned in the resume - do not invent or reference any companies or experiences not in the resume
2. The letter must be addressed to the specific company and position in the job details
3. The letter must be signed "Sincerely, {name}" at the end
4. Replace any placeholders like [Position] or [Company] with the actual job details
5. Highlight specific skills from the resume that match the job requirements
6. Keep the letter professional, concise (300-400 words), and focused on the value {name} can bring
7. Do not mention any company not in the resume
8. Use a natural, first-person writing style as if {name} wrote it themselves

STRUCTURE:
- Opening paragraph: Express interest in the specific position and company
- Middle paragraphs: Highlight relevant experience and skills that match the job requirements
- Closing paragraph: Express enthusiasm for the opportunity and desire to contribute
- Signature: "Sincerely, {name}"
"#;

const USER_PROMPT_TEMPLATE: &str = r#"
JOB DETAILS:
Title: {title}
Company: {company}
Description: {description}

APPLICANT'S RESUME:
{resume}

BASE COVER LETTER:
{base_cover_letter}

Create a personalized cover letter for this job application that focuses on the applicant's actual experience. The letter should be addressed to {company} for the {title} position and signed "Sincerely, {name}".
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_interpolates_name() {
        let templates = PromptTemplates::default();
        let prompt = templates.render_system("Ada Lovelace");
        assert!(prompt.contains("cover letter for Ada Lovelace"));
        assert!(prompt.contains("Sincerely, Ada Lovelace"));
        assert!(!prompt.contains("{name}"));
    }

    #[test]
    fn test_user_prompt_contains_all_sections() {
        let templates = PromptTemplates::default();
        let params = PromptParams {
            applicant_name: "Ada Lovelace",
            job_title: "Backend Developer",
            company: "Acme",
            description: "Build Rust services.",
            resume_text: "Ten years of systems programming.",
            base_cover_letter_text: "Dear Hiring Manager, I am writing to apply.",
        };

        let prompt = templates.render_user(&params);
        assert!(prompt.contains("JOB DETAILS:"));
        assert!(prompt.contains("Title: Backend Developer"));
        assert!(prompt.contains("Company: Acme"));
        assert!(prompt.contains("APPLICANT'S RESUME:\nTen years of systems programming."));
        assert!(prompt.contains("BASE COVER LETTER:\nDear Hiring Manager, I am writing to apply."));
        assert!(prompt.contains("addressed to Acme for the Backend Developer position"));
        assert!(prompt.contains(r#"signed "Sincerely, Ada Lovelace""#));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let templates = PromptTemplates::default();
        let params = PromptParams {
            applicant_name: "Ada Lovelace",
            job_title: "Dev",
            company: "Acme",
            description: "desc",
            resume_text: "resume",
            base_cover_letter_text: "base",
        };
        assert_eq!(templates.render_user(&params), templates.render_user(&params));
    }
}
