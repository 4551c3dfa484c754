use crate::database::activity_store::ActivityMap;
use crate::models::Activity;

// name, description, schedule, max_participants, initial participants
const DEFAULT_ACTIVITIES: &[(&str, &str, &str, u32, &[&str])] = &[
    (
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        &["michael@mergington.edu", "daniel@mergington.edu"],
    ),
    (
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        &["emma@mergington.edu", "sophia@mergington.edu"],
    ),
    (
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        &["john@mergington.edu", "olivia@mergington.edu"],
    ),
    (
        "Soccer Team",
        "Join the school soccer team and compete in matches",
        "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        22,
        &["alex@mergington.edu", "mia@mergington.edu"],
    ),
    (
        "Basketball Team",
        "Practice and play basketball with the school team",
        "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
        15,
        &["james@mergington.edu", "lucas@mergington.edu"],
    ),
    (
        "Art Studio",
        "Explore painting, drawing and sculpture in the art studio",
        "Thursdays, 3:30 PM - 5:00 PM",
        15,
        &["amelia@mergington.edu", "harper@mergington.edu"],
    ),
    (
        "Drama Club",
        "Act, direct, and produce plays and performances",
        "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        20,
        &["ella@mergington.edu", "scarlett@mergington.edu"],
    ),
    (
        "Science Olympiad",
        "Prepare for regional science competitions with hands-on experiments",
        "Fridays, 4:00 PM - 5:30 PM",
        18,
        &["henry@mergington.edu", "grace@mergington.edu"],
    ),
    (
        "Debate Team",
        "Develop public speaking and argumentation skills",
        "Tuesdays, 3:30 PM - 5:00 PM",
        16,
        &["charlotte@mergington.edu", "benjamin@mergington.edu"],
    ),
];

pub fn default_activities() -> ActivityMap {
    DEFAULT_ACTIVITIES
        .iter()
        .map(|(name, description, schedule, max, participants)| {
            (
                name.to_string(),
                Activity::new(description, schedule, *max, participants),
            )
        })
        .collect()
}
