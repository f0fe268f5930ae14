//! Built-in controlled vocabulary of exercise names.
//!
//! One entry per canonical name with its common spellings and shorthands.
//! The reverse index in the parent module is built from this table once at
//! startup; add aliases here, not lookup logic.

/// Canonical name, followed by aliases. The canonical name itself is also a
/// valid lookup key.
pub static VOCABULARY: &[(&str, &[&str])] = &[
    ("squat", &["squats", "back squat", "back squats", "bb squat"]),
    ("front squat", &["front squats"]),
    ("goblet squat", &["goblet squats"]),
    (
        "bench press",
        &["bench", "benchpress", "flat bench", "bb bench", "barbell bench press"],
    ),
    (
        "incline bench press",
        &["incline bench", "incline press", "incline db press", "incline dumbbell press"],
    ),
    ("overhead press", &["ohp", "shoulder press", "military press", "strict press"]),
    ("deadlift", &["deadlifts", "dl", "conventional deadlift"]),
    ("romanian deadlift", &["rdl", "rdls", "romanian deadlifts", "stiff leg deadlift"]),
    ("sumo deadlift", &["sumo", "sumo deadlifts"]),
    ("barbell row", &["bb row", "bent over row", "bent over rows", "pendlay row"]),
    ("dumbbell row", &["db row", "db rows", "one arm row", "single arm row"]),
    ("pull up", &["pull ups", "pullup", "pullups", "chin up", "chin ups", "chinup"]),
    ("push up", &["push ups", "pushup", "pushups", "press up", "press ups"]),
    ("dip", &["dips", "tricep dips", "bar dips"]),
    ("lat pulldown", &["lat pulldowns", "pulldown", "pulldowns"]),
    ("seated cable row", &["cable row", "cable rows", "seated row", "seated rows"]),
    ("leg press", &["leg presses"]),
    ("leg curl", &["leg curls", "hamstring curl", "hamstring curls", "lying leg curl"]),
    ("leg extension", &["leg extensions", "quad extension", "quad extensions"]),
    ("lunge", &["lunges", "walking lunge", "walking lunges", "reverse lunge"]),
    ("bulgarian split squat", &["split squat", "split squats", "bss"]),
    ("hip thrust", &["hip thrusts", "glute bridge", "glute bridges"]),
    ("calf raise", &["calf raises", "standing calf raise", "seated calf raise"]),
    ("bicep curl", &["curl", "curls", "bicep curls", "db curl", "db curls", "barbell curl"]),
    ("hammer curl", &["hammer curls"]),
    (
        "tricep extension",
        &["tricep extensions", "overhead tricep extension", "skullcrusher", "skullcrushers"],
    ),
    ("tricep pushdown", &["pushdown", "pushdowns", "rope pushdown", "cable pushdown"]),
    ("lateral raise", &["lateral raises", "side raise", "side raises", "lat raise"]),
    ("front raise", &["front raises"]),
    ("rear delt fly", &["rear delt flys", "rear delt flyes", "reverse fly", "reverse flyes"]),
    ("chest fly", &["chest flys", "chest flyes", "pec fly", "cable fly", "db fly"]),
    ("face pull", &["face pulls"]),
    ("shrug", &["shrugs", "barbell shrug", "db shrug"]),
    ("band pull apart", &["band pull aparts", "banded pull apart", "banded pull aparts"]),
    ("plank", &["planks", "front plank"]),
    ("sit up", &["sit ups", "situp", "situps"]),
    ("crunch", &["crunches"]),
    ("russian twist", &["russian twists"]),
    ("hanging leg raise", &["hanging leg raises", "leg raise", "leg raises"]),
    ("farmer's carry", &["farmers carry", "farmer carry", "farmers walk", "farmer's walk"]),
    ("kettlebell swing", &["kb swing", "kb swings", "kettlebell swings"]),
    ("hip abduction", &["hip abductions", "abduction"]),
    ("good morning", &["good mornings"]),
    ("hack squat", &["hack squats"]),
    ("pec deck", &["pec dec", "machine fly"]),
    ("preacher curl", &["preacher curls"]),
    ("t bar row", &["t bar rows", "tbar row"]),
    ("box jump", &["box jumps"]),
    ("burpee", &["burpees"]),
    ("mountain climber", &["mountain climbers"]),
];
