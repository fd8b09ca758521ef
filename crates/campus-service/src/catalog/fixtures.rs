//! Compiled-in demo records.

use campus_core::types::Role;
use chrono::{NaiveDate, NaiveDateTime};

use super::model::{
    Announcement, Assignment, AssignmentKind, AssignmentStatus, Attendance, AttendanceStatus,
    Audience, Course, CourseMaterial, Exam, ExamKind, ExamQuestion, Grade, MaterialKind, Message,
    MessageKind, Priority, QuestionKind, ScoredWork, TranscriptEntry, User,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn at(y: i32, m: u32, d: u32, hour: u32, minute: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(hour, minute, 0).unwrap_or_default()
}

struct Person<'a> {
    id: &'a str,
    email: &'a str,
    first: &'a str,
    last: &'a str,
    role: Role,
    code: &'a str,
    affiliation: &'a str,
    bio: &'a str,
    phone: &'a str,
    joined: NaiveDate,
    avatar: &'a str,
}

impl Person<'_> {
    fn into_user(self) -> User {
        let (student_id, employee_id, grade, department) = match self.role {
            Role::Student => (
                Some(self.code.to_string()),
                None,
                Some(self.affiliation.to_string()),
                None,
            ),
            Role::Teacher | Role::Admin => (
                None,
                Some(self.code.to_string()),
                None,
                Some(self.affiliation.to_string()),
            ),
        };
        User {
            id: self.id.to_string(),
            email: self.email.to_string(),
            first_name: self.first.to_string(),
            last_name: self.last.to_string(),
            role: self.role,
            avatar: Some(self.avatar.to_string()),
            student_id,
            employee_id,
            grade,
            department,
            bio: Some(self.bio.to_string()),
            phone: Some(self.phone.to_string()),
            join_date: self.joined,
        }
    }
}

/// The three sign-in accounts, one per role.
#[must_use]
pub fn demo_accounts() -> Vec<User> {
    vec![
        Person {
            id: "1",
            email: "student@demo.com",
            first: "John",
            last: "Doe",
            role: Role::Student,
            code: "STU2024001",
            affiliation: "Computer Science - Year 3",
            bio: "Passionate about web development and AI",
            phone: "+1 (555) 123-4567",
            joined: date(2022, 9, 1),
            avatar: "https://i.pravatar.cc/150?img=1",
        }
        .into_user(),
        Person {
            id: "2",
            email: "teacher@demo.com",
            first: "Dr. Sarah",
            last: "Smith",
            role: Role::Teacher,
            code: "TCH2020001",
            affiliation: "Computer Science",
            bio: "Professor of Web Development and Software Engineering",
            phone: "+1 (555) 234-5678",
            joined: date(2020, 8, 15),
            avatar: "https://i.pravatar.cc/150?img=2",
        }
        .into_user(),
        Person {
            id: "3",
            email: "admin@demo.com",
            first: "Michael",
            last: "Johnson",
            role: Role::Admin,
            code: "ADM2019001",
            affiliation: "Administration",
            bio: "System Administrator",
            phone: "+1 (555) 345-6789",
            joined: date(2019, 1, 10),
            avatar: "https://i.pravatar.cc/150?img=3",
        }
        .into_user(),
    ]
}

/// Directory of everyone who appears in courses and conversations.
#[must_use]
pub fn users() -> Vec<User> {
    let mut users = demo_accounts();
    users.extend([
        Person {
            id: "4",
            email: "emma.wilson@student.edu",
            first: "Emma",
            last: "Wilson",
            role: Role::Student,
            code: "STU2024002",
            affiliation: "Computer Science - Year 2",
            bio: "Interested in machine learning and data science",
            phone: "+1 (555) 456-7890",
            joined: date(2023, 9, 1),
            avatar: "https://i.pravatar.cc/150?img=4",
        }
        .into_user(),
        Person {
            id: "5",
            email: "david.brown@teacher.edu",
            first: "Prof. David",
            last: "Brown",
            role: Role::Teacher,
            code: "TCH2021002",
            affiliation: "Mathematics",
            bio: "Professor of Applied Mathematics and Statistics",
            phone: "+1 (555) 567-8901",
            joined: date(2021, 1, 15),
            avatar: "https://i.pravatar.cc/150?img=5",
        }
        .into_user(),
        Person {
            id: "6",
            email: "lisa.garcia@student.edu",
            first: "Lisa",
            last: "Garcia",
            role: Role::Student,
            code: "STU2024003",
            affiliation: "Computer Science - Year 1",
            bio: "New to programming, excited to learn!",
            phone: "+1 (555) 678-9012",
            joined: date(2024, 9, 1),
            avatar: "https://i.pravatar.cc/150?img=6",
        }
        .into_user(),
    ]);
    users
}

#[must_use]
pub fn courses() -> Vec<Course> {
    let course = |id: &str, name: &str, code: &str, description: &str| Course {
        id: id.to_string(),
        name: name.to_string(),
        code: code.to_string(),
        description: description.to_string(),
        instructor_id: "2".to_string(),
        credits: 3,
        schedule: String::new(),
        semester: "Fall".to_string(),
        year: 2024,
        enrolled_students: 0,
        max_students: 30,
        materials: Vec::new(),
    };

    vec![
        Course {
            schedule: "Mon, Wed 09:00 AM - 10:30 AM".to_string(),
            enrolled_students: 25,
            materials: vec![
                CourseMaterial {
                    id: "1".to_string(),
                    title: "React Fundamentals".to_string(),
                    kind: MaterialKind::Pdf,
                    url: "https://example.com/react-fundamentals.pdf".to_string(),
                    upload_date: date(2024, 8, 15),
                    size: Some("2.5 MB".to_string()),
                },
                CourseMaterial {
                    id: "2".to_string(),
                    title: "JavaScript ES6+ Features".to_string(),
                    kind: MaterialKind::Video,
                    url: "https://example.com/js-es6-video".to_string(),
                    upload_date: date(2024, 8, 20),
                    size: None,
                },
            ],
            ..course(
                "1",
                "Web Development",
                "CS-401",
                "Learn modern web development with React, Node.js, and databases",
            )
        },
        Course {
            credits: 4,
            schedule: "Tue, Thu 11:00 AM - 12:30 PM".to_string(),
            enrolled_students: 28,
            ..course(
                "2",
                "Database Systems",
                "CS-402",
                "Comprehensive study of database design, SQL, and NoSQL systems",
            )
        },
        Course {
            schedule: "Mon, Wed, Fri 01:00 PM - 02:00 PM".to_string(),
            enrolled_students: 22,
            max_students: 25,
            ..course(
                "3",
                "Algorithms",
                "CS-403",
                "Data structures and algorithm analysis",
            )
        },
    ]
}

#[must_use]
pub fn assignments() -> Vec<Assignment> {
    vec![
        Assignment {
            id: "1".to_string(),
            title: "React Portfolio Project".to_string(),
            description: "Create a personal portfolio website using React and Tailwind CSS"
                .to_string(),
            course_id: "1".to_string(),
            due_date: at(2024, 9, 15, 23, 59),
            max_points: 100,
            kind: AssignmentKind::Project,
            status: AssignmentStatus::Published,
            attachments: vec![
                "project-requirements.pdf".to_string(),
                "starter-template.zip".to_string(),
            ],
        },
        Assignment {
            id: "2".to_string(),
            title: "Database Design Assignment".to_string(),
            description: "Design a normalized database schema for an e-commerce system"
                .to_string(),
            course_id: "2".to_string(),
            due_date: at(2024, 9, 10, 23, 59),
            max_points: 75,
            kind: AssignmentKind::Essay,
            status: AssignmentStatus::Published,
            attachments: vec!["schema-template.sql".to_string()],
        },
    ]
}

#[must_use]
pub fn attendance() -> Vec<Attendance> {
    let record = |id: &str, course_id: &str, day: NaiveDate, status| Attendance {
        id: id.to_string(),
        student_id: "1".to_string(),
        course_id: course_id.to_string(),
        date: day,
        status,
        notes: None,
    };
    vec![
        record("1", "1", date(2024, 9, 1), AttendanceStatus::Present),
        record("2", "2", date(2024, 9, 1), AttendanceStatus::Present),
        record("3", "1", date(2024, 8, 30), AttendanceStatus::Late),
    ]
}

#[must_use]
pub fn messages() -> Vec<Message> {
    let direct = |id: &str, from: &str, to: &str, subject: &str, content: &str, ts, read| Message {
        id: id.to_string(),
        sender_id: from.to_string(),
        receiver_id: to.to_string(),
        subject: subject.to_string(),
        content: content.to_string(),
        timestamp: ts,
        read,
        kind: MessageKind::Direct,
    };

    vec![
        direct(
            "1",
            "2",
            "1",
            "Assignment Feedback",
            "Great work on your latest project! I have some suggestions for improvement...",
            at(2024, 9, 1, 14, 30),
            false,
        ),
        direct(
            "2",
            "1",
            "2",
            "Question about Project",
            "Hi Dr. Smith, I have a question about the React portfolio project requirements.",
            at(2024, 9, 1, 15, 15),
            true,
        ),
        direct(
            "3",
            "2",
            "1",
            "Re: Question about Project",
            "Sure! The project should include at least 5 pages and use React Router for navigation.",
            at(2024, 9, 1, 15, 45),
            false,
        ),
        direct(
            "4",
            "1",
            "2",
            "Thank you",
            "Thank you for the clarification! I'll get started on it right away.",
            at(2024, 9, 1, 16, 0),
            true,
        ),
        direct(
            "5",
            "3",
            "1",
            "Registration Reminder",
            "Don't forget to register for next semester's courses. Registration closes on September 15th.",
            at(2024, 9, 1, 9, 0),
            false,
        ),
        direct(
            "6",
            "1",
            "3",
            "Course Registration Question",
            "Hi, I'm having trouble accessing the course registration portal. Can you help?",
            at(2024, 9, 1, 10, 30),
            true,
        ),
        direct(
            "7",
            "3",
            "1",
            "Re: Course Registration Question",
            "I've reset your portal access. Please try logging in again with your student ID.",
            at(2024, 9, 1, 11, 0),
            false,
        ),
        Message {
            kind: MessageKind::Announcement,
            ..direct(
                "8",
                "2",
                "all",
                "Class Cancelled Tomorrow",
                "Due to a faculty meeting, tomorrow's Web Development class is cancelled.",
                at(2024, 9, 1, 16, 0),
                true,
            )
        },
        direct(
            "9",
            "2",
            "1",
            "Extra Credit Opportunity",
            "There's an optional coding challenge available for extra credit. Check the course materials section.",
            at(2024, 9, 2, 8, 30),
            false,
        ),
        direct(
            "10",
            "1",
            "2",
            "Midterm Preparation",
            "Could you provide some study materials for the upcoming midterm exam?",
            at(2024, 9, 2, 12, 0),
            true,
        ),
        direct(
            "11",
            "4",
            "1",
            "Study Group",
            "Hey John! Want to join our study group for the algorithms class?",
            at(2024, 9, 2, 14, 0),
            false,
        ),
        direct(
            "12",
            "1",
            "4",
            "Re: Study Group",
            "Absolutely! When and where are you meeting?",
            at(2024, 9, 2, 14, 15),
            true,
        ),
        direct(
            "13",
            "5",
            "1",
            "Math Tutoring Available",
            "I'm offering free tutoring sessions for students struggling with calculus. Let me know if you're interested!",
            at(2024, 9, 2, 16, 30),
            false,
        ),
        direct(
            "14",
            "6",
            "1",
            "Programming Help",
            "Hi! I heard you're good with React. Could you help me with my first project?",
            at(2024, 9, 2, 18, 0),
            false,
        ),
        direct(
            "15",
            "1",
            "6",
            "Re: Programming Help",
            "Of course! I'd be happy to help. What specific part are you stuck on?",
            at(2024, 9, 2, 18, 30),
            true,
        ),
    ]
}

#[must_use]
pub fn grades() -> Vec<Grade> {
    vec![
        Grade {
            id: "1".to_string(),
            student_id: "1".to_string(),
            course_id: "1".to_string(),
            assignment_id: "1".to_string(),
            points: 85,
            max_points: 100,
            percentage: 85.0,
            letter_grade: "B+".to_string(),
            date: date(2024, 8, 25),
        },
        Grade {
            id: "2".to_string(),
            student_id: "1".to_string(),
            course_id: "2".to_string(),
            assignment_id: "2".to_string(),
            points: 92,
            max_points: 100,
            percentage: 92.0,
            letter_grade: "A-".to_string(),
            date: date(2024, 8, 28),
        },
    ]
}

#[must_use]
pub fn announcements() -> Vec<Announcement> {
    let post = |id: &str, title: &str, content: &str, audience, priority, published| Announcement {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        author_id: "3".to_string(),
        target_audience: audience,
        course_id: None,
        priority,
        publish_date: published,
        expiry_date: None,
    };
    vec![
        post(
            "1",
            "Campus Reopening Update",
            "The campus will reopen on Monday with updated safety protocols. Please review the new guidelines before attending classes.",
            Audience::All,
            Priority::High,
            at(2024, 9, 1, 8, 0),
        ),
        post(
            "2",
            "New Career Services Portal",
            "Check out our new career services portal for job opportunities, internships, and career guidance.",
            Audience::Students,
            Priority::Medium,
            at(2024, 8, 31, 10, 0),
        ),
        post(
            "3",
            "Faculty Meeting Reminder",
            "Don't forget about the faculty meeting scheduled for tomorrow at 3 PM in the main conference room.",
            Audience::Teachers,
            Priority::Medium,
            at(2024, 9, 1, 12, 0),
        ),
    ]
}

#[must_use]
pub fn exams() -> Vec<Exam> {
    vec![Exam {
        id: "1".to_string(),
        title: "Web Development Midterm".to_string(),
        course_id: "1".to_string(),
        date: at(2024, 9, 20, 10, 0),
        duration_minutes: 120,
        kind: ExamKind::Midterm,
        total_marks: 100,
        instructions: "Answer all questions. Use of external resources is not allowed.".to_string(),
        questions: vec![
            ExamQuestion {
                id: "1".to_string(),
                kind: QuestionKind::Mcq,
                question: "What is React?".to_string(),
                options: vec![
                    "A JavaScript library".to_string(),
                    "A database".to_string(),
                    "A server".to_string(),
                    "An operating system".to_string(),
                ],
                correct_option: Some(0),
                points: 5,
            },
            ExamQuestion {
                id: "2".to_string(),
                kind: QuestionKind::ShortAnswer,
                question: "Explain the concept of virtual DOM in React.".to_string(),
                options: Vec::new(),
                correct_option: None,
                points: 15,
            },
        ],
    }]
}

fn scored(items: &[(&str, f64, f64, f64)]) -> Vec<ScoredWork> {
    items
        .iter()
        .map(|&(name, score, max_score, weight)| ScoredWork {
            name: name.to_string(),
            score,
            max_score,
            weight,
        })
        .collect()
}

fn entry(
    (code, name, instructor): (&str, &str, &str),
    credits: u32,
    letter: &str,
    work: Vec<ScoredWork>,
) -> TranscriptEntry {
    TranscriptEntry {
        code: code.to_string(),
        name: name.to_string(),
        instructor: instructor.to_string(),
        credits,
        letter_grade: letter.to_string(),
        work,
    }
}

/// Fall 2025 transcript of the demo student.
#[must_use]
pub fn transcript() -> Vec<TranscriptEntry> {
    vec![
        entry(
            ("CS-401", "Web Development", "Dr. Smith"),
            3,
            "A",
            scored(&[
                ("Project 1", 95.0, 100.0, 15.0),
                ("Quiz 1", 18.0, 20.0, 10.0),
                ("Midterm Exam", 88.0, 100.0, 25.0),
                ("Project 2", 92.0, 100.0, 15.0),
                ("Final Exam", 91.0, 100.0, 35.0),
            ]),
        ),
        entry(
            ("CS-402", "Database Systems", "Prof. Johnson"),
            4,
            "A-",
            scored(&[
                ("ER Diagram", 46.0, 50.0, 10.0),
                ("SQL Queries", 28.0, 30.0, 15.0),
                ("Midterm Exam", 85.0, 100.0, 25.0),
                ("Database Design", 90.0, 100.0, 20.0),
                ("Final Project", 88.0, 100.0, 30.0),
            ]),
        ),
        entry(
            ("CS-403", "Algorithms", "Dr. Williams"),
            3,
            "B+",
            scored(&[
                ("Sorting Algorithms", 42.0, 50.0, 15.0),
                ("Graph Theory", 27.0, 30.0, 15.0),
                ("Midterm Exam", 78.0, 100.0, 30.0),
                ("Dynamic Programming", 45.0, 50.0, 15.0),
                ("Final Exam", 82.0, 100.0, 25.0),
            ]),
        ),
        entry(
            ("MATH-301", "Discrete Mathematics", "Prof. Brown"),
            4,
            "B",
            scored(&[
                ("Logic", 44.0, 50.0, 10.0),
                ("Set Theory", 26.0, 30.0, 15.0),
                ("Midterm Exam", 75.0, 100.0, 25.0),
                ("Graph Theory", 42.0, 50.0, 15.0),
                ("Final Exam", 78.0, 100.0, 35.0),
            ]),
        ),
        entry(
            ("ENG-201", "Technical Writing", "Dr. Davis"),
            3,
            "A-",
            scored(&[
                ("Research Paper", 47.0, 50.0, 20.0),
                ("Technical Report", 28.0, 30.0, 20.0),
                ("Presentation", 90.0, 100.0, 20.0),
                ("Final Project", 88.0, 100.0, 40.0),
            ]),
        ),
    ]
}
