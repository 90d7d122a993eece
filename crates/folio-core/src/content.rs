/// One entry in the project card grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

pub static PROJECTS: &[Project] = &[
    Project {
        title: "Student Management System",
        description: "Django web app to manage students, courses, and enrollments.",
        tags: &["Django", "SQLite", "Bootstrap"],
    },
    Project {
        title: "Task Tracker",
        description: "To-do app with CRUD + validation + local storage.",
        tags: &["JavaScript", "HTML", "CSS"],
    },
    Project {
        title: "Portfolio Website",
        description: "My personal portfolio with magic UI + animations.",
        tags: &["React", "UI", "Animations"],
    },
    Project {
        title: "Database Management",
        description: "Optimized MySQL database for a high-traffic e-commerce platform.",
        tags: &["SQL", "MySQL", "DB"],
    },
];
