// Shared prompt fragments.
// Each feature that calls the provider keeps its own prompts next to it
// (see generation::prompts). Only cross-cutting pieces live here.

/// Appended to system prompts whose output is parsed as JSON.
pub const JSON_ONLY_INSTRUCTION: &str = "Always return valid JSON format as response. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Appended to prompts that produce health advice.
pub const SAFETY_INSTRUCTION: &str = "\
    Respect any medical history or injuries listed: avoid exercises that load an injured area \
    and suggest consulting a professional where appropriate.";
