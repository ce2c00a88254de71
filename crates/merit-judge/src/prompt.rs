use merit_core::traits::JudgeRequest;

/// Render the instruction prompt for one feedback item.
///
/// The reply format requested here is what [`parse_response`](crate::parse_response)
/// accepts.
pub fn render_prompt(request: &JudgeRequest) -> String {
    let media_note = if request.has_media {
        "The feedback includes attached media (screenshot or recording); treat it as supporting evidence."
    } else {
        "The feedback has no attached media."
    };

    format!(
        "You are reviewing feedback that a community member left on a project.\n\
         \n\
         Project:\n{project}\n\
         \n\
         Feedback:\n{feedback}\n\
         \n\
         {media_note}\n\
         \n\
         Rate the feedback on each dimension with an integer from 1 to 10:\n\
         - relevance: how closely it addresses this project\n\
         - depth: how far it goes beyond surface impressions\n\
         - evidence: whether claims are backed by specifics, examples or media\n\
         - constructiveness: whether it offers actionable suggestions\n\
         - tone: whether it is respectful and professional\n\
         \n\
         Reply with a single JSON object and nothing else:\n\
         {{\"relevance\": <1-10>, \"depth\": <1-10>, \"evidence\": <1-10>, \
         \"constructiveness\": <1-10>, \"tone\": <1-10>, \"summary\": \"<one sentence>\"}}",
        project = request.project_context.trim(),
        feedback = request.feedback.trim(),
    )
}
