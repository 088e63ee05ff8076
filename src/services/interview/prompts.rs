//! Prompt Builder
//!
//! Pure construction of the message lists sent for each kind of model call,
//! plus the fixed texts the interview shows the candidate. Every builder
//! returns exactly one persona system message followed by one user message.

use talent_scout_core::{CandidateProfile, ExperienceTier};
use talent_scout_llm::Message;

use crate::services::persona::{PersonaRegistry, PersonaRole};

/// Shown when the candidate types an exit phrase
pub const CLOSING_MESSAGE: &str = "Thank you for your time! The interview has ended. You can request your interview summary or start a new interview.";

/// Context for the next-question prompt
#[derive(Debug, Clone)]
pub struct FollowUpContext<'a> {
    pub tech_stack: &'a [String],
    pub current_question: &'a str,
    pub current_topic: &'a str,
    pub tier: ExperienceTier,
    pub experience: u32,
}

impl FollowUpContext<'_> {
    fn render(&self) -> String {
        format!(
            "tech_stack: {}\ncurrent_question: {}\ncurrent_topic: {}",
            self.tech_stack.join(", "),
            self.current_question,
            self.current_topic
        )
    }
}

fn persona_messages(role: PersonaRole, instruction: String) -> Vec<Message> {
    let persona = PersonaRegistry::get(role);
    vec![
        Message::system(persona.identity_prompt),
        Message::user(instruction),
    ]
}

/// Opening question set, sized and pitched by experience tier
pub fn question_generation(tech_stack: &[String], experience: u32) -> Vec<Message> {
    let tier = ExperienceTier::from_years(experience);
    let level = tier.label();
    let instruction = format!(
        r#"Generate {count} technical interview questions for a {level} developer with {experience} years of experience.
The candidate is familiar with: {stack}

Requirements:
1. Questions should be {complexity} level
2. Include at least one question from each technology mentioned
3. Mix of theoretical and practical questions
4. Questions should test both knowledge and problem-solving abilities
5. Include at least one system design or architecture question for {level} level
6. Format each question as a clear, concise string on its own line
7. Start each question with its technology in square brackets

Example format:
[Technology] Question about specific concept
[Technology] Practical problem-solving scenario
[Technology] System design or architecture question"#,
        count = tier.question_count(),
        complexity = tier.complexity(),
        stack = tech_stack.join(", "),
    );
    persona_messages(PersonaRole::QuestionDesigner, instruction)
}

/// Structured evaluation in the `Score:` / `Satisfactory:` / `Feedback:` format
pub fn evaluation(question: &str, response: &str) -> Vec<Message> {
    let instruction = format!(
        r#"Evaluate the candidate's response to the technical question:
Question: {question}
Response: {response}

Provide a structured evaluation including:
1. Technical accuracy (0-10)
2. Completeness of the answer
3. Clarity of explanation
4. Whether the answer is satisfactory (true/false)

Format the response as:
Score: [number]
Satisfactory: [true/false]
Feedback: [detailed feedback]"#
    );
    persona_messages(PersonaRole::Evaluator, instruction)
}

/// Free-text assessment surfaced directly to the candidate
pub fn analysis(question: &str, response: &str) -> Vec<Message> {
    let instruction = format!(
        r#"Analyze the following candidate response to the technical question:
Question: {question}
Response: {response}

Provide a detailed analysis including:
1. Technical accuracy (0-10)
2. Clarity of explanation
3. Areas for improvement
4. Overall assessment

Format the response as a structured analysis."#
    );
    persona_messages(PersonaRole::Analyst, instruction)
}

/// Next question: pivot to a new topic after a satisfactory answer,
/// otherwise dig deeper into the same one using the answer as grounding
pub fn follow_up(
    previous_response: &str,
    context: &FollowUpContext<'_>,
    is_satisfactory: bool,
) -> Vec<Message> {
    let instruction = if is_satisfactory {
        format!(
            r#"Generate a new technical question from a different topic.
The candidate is familiar with: {stack}
The candidate is a {level} developer with {experience} years of experience.

Requirements:
1. Choose a different technology or topic than the previous question
2. Match the candidate's experience level
3. Test a different aspect of their knowledge
4. Format as a clear, concise question starting with its technology in square brackets, e.g. [Technology]

Previous question was about: {question}"#,
            stack = context.tech_stack.join(", "),
            level = context.tier.label(),
            experience = context.experience,
            question = context.current_question,
        )
    } else {
        format!(
            r#"Based on the candidate's previous response, generate a follow-up question to explore the topic further:
Previous Response: {previous_response}
Context:
{context}

Generate a focused, relevant follow-up question that builds upon the previous response.
Stay on the current topic and start the question with its technology in square brackets."#,
            context = context.render(),
        )
    };
    persona_messages(PersonaRole::FollowUpInterviewer, instruction)
}

/// End-of-interview summary over every assistant message
pub fn summary(
    profile: &CandidateProfile,
    questions_asked: u32,
    assistant_messages: &[&str],
) -> Vec<Message> {
    let instruction = format!(
        r#"Generate a comprehensive interview summary for the following candidate:
Name: {name}
Position: {position}
Experience: {experience} years
Tech Stack: {stack}
Questions Asked: {questions_asked}

Interview Messages:
{transcript}

Please provide a structured summary including:
1. Overall Performance (0-10)
2. Key Strengths
3. Areas for Improvement
4. Technical Knowledge Assessment
5. Communication Skills
6. Final Recommendation
7. Interview Duration"#,
        name = profile.full_name(),
        position = profile.position(),
        experience = profile.experience(),
        stack = profile.tech_stack_display(),
        transcript = assistant_messages.join("\n"),
    );
    persona_messages(PersonaRole::Summarizer, instruction)
}

/// Greeting shown once, before the first question
pub fn greeting(profile: &CandidateProfile) -> String {
    format!(
        r#"Hello {name}! 👋

I'm your technical interview assistant for the {position} position.
I'll be conducting a technical assessment based on your experience with {stack}.

The interview will include:
- Technical questions based on your experience level
- Real-time feedback on your responses
- Follow-up questions to explore your knowledge further
- Moving to new topics once we've covered a subject thoroughly

You can end the interview at any time by:
- Ending the interview to receive your summary
- Typing "exit", "quit", or "end interview" in the chat

Let's begin!"#,
        name = profile.full_name(),
        position = profile.position(),
        stack = profile.tech_stack_display(),
    )
}

/// Assistant message carrying the first question
pub fn initial_question_message(question: &str) -> String {
    format!("Let's start with this technical question:\n\n{}", question)
}

/// The single assistant message appended after each answer
pub fn turn_message(analysis: &str, feedback: &str, next_question: &str) -> String {
    format!(
        "**Analysis of your response:**\n{analysis}\n\n**Evaluation:**\n\n- Feedback: {feedback}\n\n**Next Question:**\n{next_question}"
    )
}
