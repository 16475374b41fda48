// Prompt constants for the optimize gateway.

/// Resume optimization prompt template. Replace `{resume}` before sending.
///
/// The resume text is interpolated verbatim; the directive list is fixed so
/// the composed prompt is a pure function of the input.
pub const OPTIMIZE_PROMPT_TEMPLATE: &str = "\
You are an expert resume optimizer and career coach. Analyze the following resume and improve it by:

1. Enhancing action verbs and impact statements
2. Quantifying achievements where possible
3. Improving formatting and structure
4. Making descriptions more concise and powerful
5. Highlighting key skills and accomplishments
6. Ensuring ATS (Applicant Tracking System) compatibility
7. Removing redundancies and weak language

Maintain the original format structure (sections, bullet points, etc.) but improve the content quality.

Original Resume:
{resume}

Provide the optimized version:";

/// Composes the single prompt sent to the generation backend.
pub fn build_optimize_prompt(resume: &str) -> String {
    OPTIMIZE_PROMPT_TEMPLATE.replace("{resume}", resume)
}
