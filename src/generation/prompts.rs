//! Prompt templates for each pipeline call.

use crate::types::{GenerationRequest, PostPlan};

pub fn planning_prompt(request: &GenerationRequest) -> String {
    format!(
        r#"As a LinkedIn content strategist, analyze this topic and plan different post approaches:

Topic: "{topic}"
Tone: {tone}
Audience: {audience}
Length: {length}

Create a strategic plan for {count} different LinkedIn posts. For each post, specify:
1. The content approach (e.g., question-based, story-driven, list format, insight-sharing)
2. Key points to highlight
3. Emotional hook or engagement strategy

Return your response as a JSON array with this structure:
[
  {{
    "approach": "Question-based engagement",
    "keyPoints": ["point1", "point2", "point3"],
    "hook": "Opening question or statement"
  }}
]

Make each approach distinctly different to provide variety."#,
        topic = request.topic,
        tone = request.tone,
        audience = request.audience,
        length = request.length,
        count = request.post_count,
    )
}

pub fn post_prompt(request: &GenerationRequest, plan: &PostPlan) -> String {
    let key_points = if plan.key_points.is_empty() {
        request.topic.clone()
    } else {
        plan.key_points.join(", ")
    };
    let (min_words, max_words) = request.length.word_range();

    format!(
        r#"Create a LinkedIn post following this plan:

Topic: "{topic}"
Approach: {approach}
Key Points: {key_points}
Hook: {hook}
Tone: {tone}
Audience: {audience}
Length: {length} ({min_words}-{max_words} words)

Guidelines:
- Write in first person when appropriate
- Include line breaks for readability
- Be authentic and engaging
- Avoid overly promotional language
- Include a clear call-to-action at the end
- Make it LinkedIn-appropriate (professional but personable)

Return ONLY the post content without hashtags or additional commentary."#,
        topic = request.topic,
        approach = plan.approach,
        hook = plan.hook,
        tone = request.tone,
        audience = request.audience,
        length = request.length,
    )
}

pub fn hashtag_prompt(request: &GenerationRequest) -> String {
    format!(
        r#"Generate 5-8 relevant LinkedIn hashtags for this post about "{topic}".
Consider the tone ({tone}) and audience ({audience}).

Return only the hashtags as a comma-separated list without the # symbol.
Example: LinkedInTips, CareerAdvice, ProfessionalGrowth"#,
        topic = request.topic,
        tone = request.tone,
        audience = request.audience,
    )
}

pub fn cta_prompt(request: &GenerationRequest) -> String {
    format!(
        r#"Create a brief, engaging call-to-action (1-2 sentences) for a LinkedIn post about "{topic}".
Tone: {tone}

Make it encourage engagement (comments, shares, connections, etc.) and be specific to the topic.
Return only the CTA text."#,
        topic = request.topic,
        tone = request.tone,
    )
}
