//! Built-in default catalog.
//!
//! Plans reference exercises by name here; [`crate::Database::seed_catalog`]
//! maps names to the IDs assigned on insert.

/// Default exercises with their instruction lines.
pub const DEFAULT_EXERCISES: &[(&str, &[&str])] = &[
    // Strength
    (
        "pushups",
        &[
            "Start in plank position",
            "Lower body until chest nearly touches floor",
            "Push back up to starting position",
            "Keep core tight and back straight",
        ],
    ),
    (
        "squats",
        &[
            "Stand with feet shoulder-width apart",
            "Lower hips back and down",
            "Keep chest up and knees behind toes",
            "Return to standing position",
        ],
    ),
    (
        "plank",
        &[
            "Start on hands and knees",
            "Lower onto forearms",
            "Keep body in straight line",
            "Engage core and hold position",
        ],
    ),
    (
        "glute_bridges",
        &[
            "Lie on back with knees bent",
            "Lift hips toward ceiling",
            "Squeeze glutes at the top",
            "Lower back down slowly",
        ],
    ),
    // Endurance
    (
        "high_knees",
        &[
            "Run in place at high speed",
            "Bring knees up to chest level",
            "Pump arms vigorously",
            "Maintain fast pace",
        ],
    ),
    (
        "jumping_jacks",
        &[
            "Stand with feet together",
            "Jump while spreading legs",
            "Raise arms overhead",
            "Return to starting position",
        ],
    ),
    (
        "butt_kicks",
        &[
            "Jog in place quickly",
            "Kick heels up to glutes",
            "Maintain rhythm and pace",
            "Keep core engaged",
        ],
    ),
    (
        "mountain_climbers",
        &[
            "Start in plank position",
            "Bring right knee to chest",
            "Quickly switch legs",
            "Maintain steady rhythm",
        ],
    ),
    // Balance
    (
        "calf_raises",
        &[
            "Stand with feet hip-width",
            "Rise up onto toes",
            "Hold at the top",
            "Lower slowly back down",
        ],
    ),
    (
        "side_leg_raises",
        &[
            "Stand holding onto support",
            "Lift one leg out to side",
            "Keep body straight",
            "Lower slowly with control",
        ],
    ),
    (
        "tree_pose",
        &[
            "Stand on one leg",
            "Place foot on inner thigh",
            "Bring hands to prayer position",
            "Hold and breathe deeply",
        ],
    ),
    (
        "side_stepping",
        &[
            "Step side to side slowly",
            "Maintain upright posture",
            "Use support if needed",
            "Controlled movements",
        ],
    ),
    // Flexibility
    (
        "forward_bend",
        &[
            "Stand with feet together",
            "Slowly bend forward from hips",
            "Reach for toes or shins",
            "Hold for 20-30 seconds",
        ],
    ),
    (
        "quad_stretch",
        &[
            "Stand holding onto support",
            "Bend one knee and grab ankle",
            "Gently pull heel toward glutes",
            "Keep knees close together",
        ],
    ),
    (
        "hamstring_stretch",
        &[
            "Sit with one leg extended",
            "Bend other leg with foot to thigh",
            "Reach toward extended foot",
            "Hold for 20-30 seconds",
        ],
    ),
    (
        "cat_cow",
        &[
            "Start on hands and knees",
            "Arch back upward (cat)",
            "Drop belly downward (cow)",
            "Flow between positions",
        ],
    ),
    (
        "lunges",
        &[
            "Stand with feet together",
            "Step forward with one leg",
            "Lower hips until both knees bent 90°",
            "Push back to start position",
        ],
    ),
    (
        "arm_circles",
        &[
            "Stand with feet shoulder-width apart, extend arms to the sides.",
            "Make small circles, then large circles, forward and backward.",
        ],
    ),
];

/// Default plans as (name, exercise names).
pub const DEFAULT_PLANS: &[(&str, &[&str])] = &[
    (
        "Strength Training",
        &["pushups", "squats", "plank", "glute_bridges"],
    ),
    (
        "Endurance Training",
        &["high_knees", "jumping_jacks", "butt_kicks", "mountain_climbers"],
    ),
    (
        "Balance Training",
        &["calf_raises", "side_leg_raises", "tree_pose", "side_stepping"],
    ),
    (
        "Flexibility Training",
        &["forward_bend", "quad_stretch", "hamstring_stretch", "cat_cow"],
    ),
    (
        "Full Body Training",
        &["squats", "plank", "lunges", "glute_bridges"],
    ),
    (
        "Warmup",
        &["arm_circles", "butt_kicks", "high_knees", "lunges"],
    ),
];

/// Row counts written by a seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub exercises: usize,
    pub plans: usize,
}
