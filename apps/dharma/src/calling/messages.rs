// Sentence pools for personalized output. Pure data; selection lives in recommender.rs.

/// One line per selected calling, chosen at random.
pub const PERSONALIZED_INSIGHTS: &[(&str, &[&str])] = &[
    (
        "helping_others_grow",
        &[
            "You have a natural gift for bringing out the best in others.",
            "Your ability to see potential in people is remarkable.",
            "You find joy in witnessing others' growth and development.",
            "Teaching and mentoring seem to come naturally to you.",
        ],
    ),
    (
        "creating_and_innovating",
        &[
            "You have a natural drive to bring new ideas into reality.",
            "Your creative energy is a powerful force that seeks expression.",
            "You see possibilities where others see limitations.",
            "Building and creating seems to be in your DNA.",
        ],
    ),
    (
        "solving_problems",
        &[
            "You have a natural talent for finding solutions to complex challenges.",
            "Your analytical mind thrives when tackling difficult problems.",
            "You see obstacles as puzzles waiting to be solved.",
            "Finding better ways to do things energizes you.",
        ],
    ),
    (
        "caring_for_others",
        &[
            "Your compassionate nature is a gift to those around you.",
            "You have a natural ability to sense others' needs and respond with care.",
            "Supporting others through difficult times gives you a sense of purpose.",
            "Your empathy allows you to connect deeply with others.",
        ],
    ),
    (
        "organizing_and_planning",
        &[
            "Your ability to create order from chaos is remarkable.",
            "Your talent for seeing the big picture while managing details is a rare gift.",
            "You find satisfaction in systems that run smoothly and efficiently.",
            "Planning and coordinating seem to come naturally to you.",
        ],
    ),
    (
        "expressing_creativity",
        &[
            "Your creative spirit seeks outlets for expression.",
            "You see the world through a unique lens that others benefit from.",
            "Bringing beauty and meaning into the world drives you.",
            "Your imagination is a powerful tool for innovation.",
        ],
    ),
    (
        "discovering_knowledge",
        &[
            "Your curious mind constantly seeks deeper understanding.",
            "You find joy in the pursuit of knowledge and insight.",
            "Learning and sharing wisdom seems central to who you are.",
            "Your analytical nature helps you uncover hidden truths.",
        ],
    ),
    (
        "leading_and_inspiring",
        &[
            "You have a natural ability to inspire others toward a shared vision.",
            "Your leadership qualities draw people to follow your guidance.",
            "You see potential in groups that others might miss.",
            "Bringing people together for a common purpose energizes you.",
        ],
    ),
];

/// Role-specific explanations, keyed by exact role title.
pub const ALIGNMENT_EXPLANATIONS: &[(&str, &[&str])] = &[
    (
        "Teacher/Professor",
        &[
            "This role lets you directly shape minds and witness the 'aha' moments when students grasp new concepts.",
            "As an educator, you'll guide others through their learning journey, helping them discover their own potential.",
            "Teaching allows you to create transformative learning experiences that change how people see themselves and the world.",
        ],
    ),
    (
        "Corporate Trainer",
        &[
            "As a trainer in industry, you'll help professionals develop skills that transform their careers and confidence.",
            "This role lets you combine technical expertise with your passion for developing others' potential.",
            "You'll design learning experiences that help professionals overcome challenges and reach new heights.",
        ],
    ),
    (
        "Coach",
        &[
            "Coaching allows you to walk alongside others as they navigate their personal and professional growth.",
            "This role lets you ask powerful questions that help others discover their own answers and potential.",
            "As a coach, you'll create a safe space for transformation and breakthrough moments.",
        ],
    ),
    (
        "Software Developer",
        &[
            "This role allows you to create solutions that solve real problems and improve people's lives.",
            "As a developer, you'll build digital experiences that transform how people work and connect.",
            "This path lets you express your creativity through code, bringing new possibilities into existence.",
        ],
    ),
    (
        "Product Designer",
        &[
            "Design work allows you to shape how people experience and interact with the world around them.",
            "This role lets you solve human problems through thoughtful, creative design solutions.",
            "As a designer, you'll create products that seamlessly blend form and function to enhance lives.",
        ],
    ),
    (
        "Consultant",
        &[
            "Consulting lets you tackle a variety of complex problems across different organizations and industries.",
            "This role allows you to analyze situations from multiple angles and develop innovative solutions.",
            "As a consultant, you'll help organizations overcome their biggest challenges and reach their potential.",
        ],
    ),
    (
        "Engineer",
        &[
            "Engineering allows you to apply scientific principles to create solutions to real-world problems.",
            "This role lets you design and build systems that improve efficiency, safety, or quality of life.",
            "As an engineer, you'll solve complex technical challenges that others might find overwhelming.",
        ],
    ),
    (
        "Healthcare Professional",
        &[
            "This path allows you to provide care and comfort to people during their most vulnerable moments.",
            "As a healthcare provider, you'll make a direct impact on people's wellbeing and quality of life.",
            "This role lets you combine technical expertise with deep compassion to heal and support others.",
        ],
    ),
    (
        "Project Manager",
        &[
            "This role lets you orchestrate complex initiatives, bringing order to multifaceted challenges.",
            "As a project manager, you'll guide teams through uncertainty toward successful outcomes.",
            "This path allows you to create systems and processes that make ambitious goals achievable.",
        ],
    ),
    (
        "Graphic Designer",
        &[
            "This role allows you to communicate powerful messages through visual storytelling.",
            "As a designer, you'll create work that evokes emotion and inspires action.",
            "This path lets you transform abstract concepts into tangible visual experiences.",
        ],
    ),
    (
        "Researcher",
        &[
            "Research allows you to push the boundaries of what's known and discover new insights.",
            "This role lets you dive deep into questions that fascinate you and share your findings with the world.",
            "As a researcher, you'll contribute to humanity's collective knowledge and understanding.",
        ],
    ),
    (
        "Team Leader/Manager",
        &[
            "This role lets you build and nurture teams that accomplish more together than individuals could alone.",
            "As a leader, you'll help team members develop their strengths and navigate challenges.",
            "This path allows you to create environments where people feel empowered to do their best work.",
        ],
    ),
];

/// Used for any role without its own entry above.
pub const GENERIC_ALIGNMENTS: &[&str] = &[
    "This role allows you to express your dharma by creating value through your natural gifts and inclinations.",
    "This path provides a platform where your unique strengths can make a meaningful difference.",
    "In this role, you can align your work with your deeper purpose, bringing fulfillment beyond just earning a living.",
];

/// Looks up a pool in one of the `(key, sentences)` tables above.
pub fn pool_for(
    table: &'static [(&'static str, &'static [&'static str])],
    key: &str,
) -> Option<&'static [&'static str]> {
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, pool)| *pool)
}
