use crate::survey::Trait;

/// What a strong score on the trait brings to a role.
pub fn strength_effect(t: Trait) -> &'static str {
    match t {
        Trait::E => "supports clear communication and influencing others",
        Trait::C => "helps break tasks down and deliver reliably",
        Trait::O => "brings creative solutions and fresh perspectives",
        Trait::A => "builds trust and smooth teamwork",
        Trait::N => "stays calm and steady under pressure",
        Trait::M => "enables structured thinking and data/logic reasoning",
    }
}

/// One fixed improvement tip per trait.
pub fn improvement_tip(t: Trait) -> &'static str {
    match t {
        Trait::E => "Prepare talking points and practice concise presentations.",
        Trait::C => "Use pomodoro with a kanban board or checklists, and review weekly.",
        Trait::O => "Keep an idea backlog and schedule regular creative time.",
        Trait::A => "Run more user interviews and practice empathy mapping.",
        Trait::N => "Learn stress management: chunk work, exercise, breathing.",
        Trait::M => "Do more data analysis and logic drills, and write out your reasoning.",
    }
}
