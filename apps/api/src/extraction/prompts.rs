// Extraction prompt template.

pub const EXTRACTION_SYSTEM: &str = "You are an expert AI agent that extracts structured data from resumes.";

pub const EXTRACTION_PROMPT: &str = r#"{system}

Extract data from this resume text and output valid JSON only (no extra text). If professional_summary is missing, fill it with an appropriate 1-2 sentence summary.

Resume:
{resume_text}

Return JSON with these keys:
{
  "professional_summary": "",
  "skills": [],
  "personal_info": {
    "image": "",
    "profession": "",
    "full_name": "",
    "email": "",
    "phone": "",
    "location": "",
    "website": ""
  },
  "experience": [
    {
      "company": "",
      "position": "",
      "start_date": "",
      "end_date": "",
      "description": "",
      "is_current": false
    }
  ],
  "projects": [
    {
      "name": "",
      "type": "",
      "description": ""
    }
  ],
  "education": [
    {
      "institution": "",
      "degree": "",
      "graduation_date": "",
      "field": "",
      "gpa": ""
    }
  ]
}"#;

pub fn build_extraction_prompt(resume_text: &str) -> String {
    // resume_text goes in last so placeholders inside it are left alone
    EXTRACTION_PROMPT
        .replace("{system}", EXTRACTION_SYSTEM)
        .replacen("{resume_text}", resume_text, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_system_and_resume() {
        let prompt = build_extraction_prompt("Jane Doe\nRust engineer");
        assert!(prompt.starts_with(EXTRACTION_SYSTEM));
        assert!(prompt.contains("Resume:\nJane Doe\nRust engineer\n"));
        assert!(!prompt.contains("{resume_text}"));
        assert!(prompt.contains("\"graduation_date\""));
    }

    #[test]
    fn test_placeholder_text_in_resume_is_preserved() {
        let prompt = build_extraction_prompt("I like {system} tokens");
        assert!(prompt.contains("I like {system} tokens"));
    }
}
