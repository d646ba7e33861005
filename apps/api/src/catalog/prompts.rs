// Prompt templates for every resume action.
// Each template has exactly one substitution point: `{resume_text}`.

pub const SUMMARY_PROMPT: &str = "You are an expert resume analyzer.
Review the following resume and create a concise professional summary (7–9 bullet points or short paragraph).
Resume:
{resume_text}";

/// The `Question:` / `Answer:` format is load-bearing: the output formatter splits on it.
pub const INTERVIEW_QA_PROMPT: &str = "You are a technical interviewer.
Based on the resume, create 10-15 realistic interview questions with short model answers.
Format:
Question: <text>
Answer: <text>
Resume:
{resume_text}";

pub const STUDY_LINKS_PROMPT: &str = "You are a career mentor.
Based on the resume, list 8–10 online study resources (with working URLs)
for improving the top technical skills mentioned.
Resume:
{resume_text}";

pub const COVER_LETTER_PROMPT: &str = "You are a professional career consultant.
Based on the resume, write a formal cover letter for a general job application.
Keep it concise and tailored.
Resume:
{resume_text}";

pub const IMPROVEMENT_TIPS_PROMPT: &str = "You are an experienced HR expert.
Review the resume and provide improvement suggestions (skills, formatting, wording, missing metrics).
Resume:
{resume_text}";

pub const CAREER_ROLES_PROMPT: &str = "You are a career advisor.
Suggest 5–7 ideal job roles that match this candidate’s resume.
Give 1-line justification for each.
Resume:
{resume_text}";

pub const SKILL_GAP_PROMPT: &str = "You are a technical recruiter.
Identify missing or weak skills and recommend new ones to learn
for improving job readiness.
Resume:
{resume_text}";

pub const LINKEDIN_SUMMARY_PROMPT: &str = "You are a branding coach.
Write a 5–6 line first-person LinkedIn 'About' section from this resume.
Resume:
{resume_text}";

pub const PROJECT_HIGHLIGHTS_PROMPT: &str = "You are a resume content parser.
Extract and summarize all projects or achievements in 2–3 bullet points each.
Resume:
{resume_text}";

pub const ATS_SCORE_PROMPT: &str = "You are an ATS (Applicant Tracking System) evaluator.
Analyze this resume and score it (0–100) based on:
- Keyword relevance
- Formatting simplicity
- Measurable impact
- Readability
Provide actionable optimization tips.
Resume:
{resume_text}";

pub const APPLICATION_EMAIL_PROMPT: &str = "You are a professional recruiter.
Write a short, polite email to send with this resume while applying for a job.
Resume:
{resume_text}";
