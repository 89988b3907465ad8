// Enhancement prompt templates.

pub const PRO_SUMMARY_INSTRUCTION: &str = "\
You are a professional resume writer specializing in crafting impactful and ATS-optimized summaries. \
Refine and enhance the candidate's professional summary into 1-2 powerful sentences that highlight \
key technical skills, relevant experience, and career goals. \
The output must be concise, compelling, and ready for inclusion in a modern resume. \
Return only the improved summary text with no explanations.";

pub const JOB_DESC_INSTRUCTION: &str = "\
You are an expert resume writer. Rewrite the job description section into 1-2 concise, impactful \
sentences emphasizing responsibilities, achievements, and measurable results. \
Use strong action verbs and keep it ATS-friendly. \
Return only the rewritten job description text without explanations.";

/// Which piece of resume text is being enhanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnhanceTarget {
    ProfessionalSummary,
    JobDescription,
}

impl EnhanceTarget {
    fn instruction(self) -> &'static str {
        match self {
            EnhanceTarget::ProfessionalSummary => PRO_SUMMARY_INSTRUCTION,
            EnhanceTarget::JobDescription => JOB_DESC_INSTRUCTION,
        }
    }

    fn label(self) -> &'static str {
        match self {
            EnhanceTarget::ProfessionalSummary => "Candidate summary",
            EnhanceTarget::JobDescription => "Job description",
        }
    }

    fn closing(self) -> &'static str {
        match self {
            EnhanceTarget::ProfessionalSummary => "Return only the improved summary text.",
            EnhanceTarget::JobDescription => "Return only the rewritten job description.",
        }
    }
}

/// Wraps the caller's text in the fixed instruction for `target`.
/// The text is inserted verbatim.
pub fn build_enhance_prompt(target: EnhanceTarget, user_content: &str) -> String {
    format!(
        "{}\n\n{}:\n{}\n\n{}",
        target.instruction(),
        target.label(),
        user_content,
        target.closing()
    )
}
