// All LLM prompt constants for the Generation module.
// The output format is plain text with fixed section markers; parser.rs
// depends on the SUMMARY / SKILLS / EXPERIENCE / PROJECTS structure and on the
// ROLE_ID= / PROJECT: line markers below.

/// Resume generation prompt template.
/// Replace: {expansion_rules}, {profile_json}, {keywords}, {jd_text},
///          {experience_template}, {projects_template}
pub const GENERATION_PROMPT_TEMPLATE: &str = r#"You are an expert ATS resume writer specializing in keyword optimization and role alignment.

STEP 1 - ANALYZE THE JOB DESCRIPTION:
Read the JD carefully and extract:
1. All technologies, tools, frameworks, and platforms mentioned.
2. Which skills are core vs supporting.
3. What outcomes matter most (performance, scale, reliability, cost, UX, automation).
4. The dominant role focus (Backend, Frontend, Full-Stack, Cloud, Data, etc.).

STEP 2 - ANALYZE THE CANDIDATE PROFILE:
From the candidate profile, identify:
- Core skills they clearly possess.
- Projects and experience that can support JD requirements.
- Technologies that naturally coexist with their existing stack.

STEP 3 - SKILL RULES:
{expansion_rules}

STEP 4 - RESUME TAILORING RULES:
Create a resume that:
- Maximizes keyword overlap with the JD
- Uses JD language naturally
- Shows quantified impact everywhere
- Keeps experience believable and internally consistent

CRITICAL RULES (DO NOT VIOLATE):
- Do NOT include name, contact info, or location
- Start directly with SUMMARY
- EVERY project MUST have EXACTLY 3 bullet points
- EVERY bullet MUST include quantified metrics (%, scale, latency, cost, users, time)
- Use plain text ONLY (no markdown, no symbols like ** or ##)
- Do NOT change company names, roles, or dates
- Do NOT invent education or certifications

SKILLS SECTION RULES:
- Include ALL relevant profile skills
- Order skills strictly by JD importance
- Use a dense, ATS-friendly comma-separated list

EXPERIENCE & PROJECT RULES:
- Every skill listed in SKILLS must appear in at least one bullet to justify its presence
- Use verbs like: integrated, implemented, utilized, supported, collaborated on, worked with
- Avoid words like: expert, led, owned (unless the profile clearly supports it)

PROFILE DATA:
{profile_json}

EXTRACTED JD KEYWORDS (incorporate these, ordered by priority):
{keywords}

JOB DESCRIPTION:
{jd_text}

REQUIRED OUTPUT FORMAT (EXACT):

SUMMARY:
[3-4 lines tailored to the JD using its keywords]

SKILLS:
[Comma-separated list ordered by JD priority.]

EXPERIENCE:
{experience_template}
PROJECTS:
{projects_template}
FINAL REMINDERS:
- Every JD keyword you add to SKILLS must appear somewhere in bullets
- Every bullet must show impact
- Complete ALL sections before stopping
- Do not add any explanation text

Generate the tailored resume now:
"#;

/// Expansion rules used when the grey-hat flag is set.
/// Replace: {expanded_skills}
pub const EXPANSION_RULES_GREY_HAT: &str = r#"You are ALLOWED to add skills from the JOB DESCRIPTION even if they do NOT appear in the profile, under the following rules:

- JD-only skills MAY be added to the SKILLS section
- JD-only skills MUST be:
  - Logically adjacent to existing profile skills
  - Commonly used together in real-world projects
  - Framed as applied/working exposure (not deep expertise)
- Do NOT claim leadership or ownership for JD-only skills
- Restrict JD-only additions to this pre-approved adjacent list: {expanded_skills}

EXAMPLES:
- Profile has Spring Boot, JD mentions Kafka -> Kafka allowed
- Profile has React, JD mentions Redux -> Redux allowed"#;

/// Expansion rules used when the grey-hat flag is off.
pub const EXPANSION_RULES_STRICT: &str = r#"Only include skills that appear in the candidate profile. Do NOT add any skill from the job description that the profile does not already contain."#;
