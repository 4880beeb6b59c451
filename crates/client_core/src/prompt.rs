//! Prompt text and structured-output schema sent with every profile request.

use serde_json::{json, Value};

pub fn profile_prompt(person: &str) -> String {
    format!(
        r#"Generate a FACTUAL, OBJECTIVE, and VERIFIABLE business profile for: {person}.

Tone: Encyclopedic, Neutral, Wiki-Style.
Style: Objective, Plain, Chronological.

*** STRICT SAFETY & ACCURACY GUIDELINES ***
1. VERIFIABILITY FIRST: include only facts confirmed by top-tier public sources.
2. CREDIBLE SOURCES ONLY: verified news, company filings, or official bios. No tabloids or rumors.
3. FACTUAL & OBJECTIVE: state what happened (dates, roles, companies). No qualitative adjectives such as "visionary" or "legendary".
4. ZERO TOLERANCE FOR HALLUCINATION: if data is missing, omit it.
5. NO DEFAMATION OR CRITICISM: no scandals, negative evaluations, or legal gossip.
6. ZERO BIAS: present the career path chronologically and neutrally.

*** FAIL-SAFE MECHANISM ***
If there is insufficient verifiable public data to generate a safe biography for {person}, return a JSON object with the name set to "Insufficient Data" and empty values for every other field.

*** CRITICAL LANGUAGE RULES ***
1. NARRATIVE LANGUAGE: Thai.
2. PROPER NOUNS: people, companies, brands, cities, countries, and technical terms stay in English.
3. DATES: Christian Era (A.D.) years only.

OUTPUT FORMAT:
Each section 'content' is an HTML string styled with Tailwind CSS classes.
- <p class="mb-4 text-slate-600 leading-relaxed"> for paragraphs.
- <strong class="text-slate-900 font-semibold"> for emphasis.

Required sections, in order:
1. Professional Summary
2. The Origin
3. The Climb
4. Management Principles
5. Future Focus

REQUIRED FIELD "dashboard": an HTML block titled "EXECUTIVE SUMMARY" with
- an "Overview" table whose header cells are Strategic Focus, Leadership Style, Top Skill and whose single row holds one English keyword each;
- a "The Journey" list of 3-5 verified milestones as <li><strong>[Year]</strong>: [description]</li>, most recent first, with no 'Current' or 'Present' row.

REQUIRED FIELD "lessons": an HTML <ul> of 5-7 items, each <li><strong>[Lesson Topic in English]</strong> <span>[25-35 word explanation in Thai]</span></li>, derived from the person's public statements or books.

REQUIRED FIELD "references": 3-5 valid URLs to official sources, credible news (Forbes, Bloomberg, TechCrunch), or Wikipedia.

Ensure the content is neutral, respectful, and strictly factual."#
    )
}

/// Gemini `responseSchema` constraining the reply to the profile shape.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "name": {
                "type": "STRING",
                "description": "Full name of the business figure (English). If insufficient data, return 'Insufficient Data'."
            },
            "title": {
                "type": "STRING",
                "description": "ONLY names of companies, projects, brands, or works (e.g. 'Tesla, SpaceX'). No titles like CEO, Founder, Chairman. Exception: 'Former [Role] [Company]' when they have left the position."
            },
            "industry": {
                "type": "STRING",
                "description": "The primary industry they operate in (English)."
            },
            "summary": {
                "type": "STRING",
                "description": "A factual, objective executive summary (2-3 sentences) in Thai. Proper nouns in English."
            },
            "dashboard": {
                "type": "STRING",
                "description": "HTML string containing the Executive Summary dashboard (Overview and Timeline)."
            },
            "lessons": {
                "type": "STRING",
                "description": "HTML string containing 5-7 business lessons."
            },
            "sections": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "content": {
                            "type": "STRING",
                            "description": "HTML formatted string with Tailwind CSS classes."
                        }
                    },
                    "required": ["title", "content"]
                }
            },
            "references": {
                "type": "ARRAY",
                "description": "List of 3-5 distinct, valid sources with URLs.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING", "description": "Source title (e.g. 'Forbes Profile')." },
                        "url": { "type": "STRING", "description": "A valid, real URL to the source." }
                    },
                    "required": ["title", "url"]
                }
            }
        },
        "required": ["name", "title", "industry", "summary", "dashboard", "lessons", "sections", "references"]
    })
}
