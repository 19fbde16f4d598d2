use mergington::data::Activity;
use mergington::id::ActivityName;

/// The activities offered when the service starts, in display order.
pub fn activities() -> Vec<(ActivityName, Activity)> {
    vec![
        (
            "Basketball".into(),
            Activity::new(
                "Play basketball and improve your skills",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                15,
                ["alex@mergington.edu"],
            ),
        ),
        (
            "Tennis Club".into(),
            Activity::new(
                "Learn tennis techniques and compete in matches",
                "Tuesdays and Thursdays, 4:00 PM - 5:00 PM",
                10,
                ["james@mergington.edu"],
            ),
        ),
        (
            "Art Workshop".into(),
            Activity::new(
                "Explore painting, drawing, and sculpture",
                "Wednesdays, 3:30 PM - 5:00 PM",
                18,
                ["isabella@mergington.edu", "grace@mergington.edu"],
            ),
        ),
        (
            "Music Band".into(),
            Activity::new(
                "Play instruments and perform in school concerts",
                "Fridays, 4:00 PM - 5:30 PM",
                25,
                ["noah@mergington.edu"],
            ),
        ),
        (
            "Math Club".into(),
            Activity::new(
                "Solve challenging math problems and prepare for competitions",
                "Thursdays, 3:30 PM - 4:30 PM",
                20,
                ["sophia@mergington.edu", "liam@mergington.edu"],
            ),
        ),
        (
            "Robotics Team".into(),
            Activity::new(
                "Design and build robots for competitions",
                "Mondays and Thursdays, 4:00 PM - 5:30 PM",
                16,
                ["ava@mergington.edu"],
            ),
        ),
        (
            "Chess Club".into(),
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                ["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        ),
        (
            "Programming Class".into(),
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                ["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        ),
        (
            "Gym Class".into(),
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                ["john@mergington.edu", "olivia@mergington.edu"],
            ),
        ),
    ]
}
