//! Built-in demo content used when `store.seed_demo_data` is on.

use crate::Snapshot;

use kb_core::{
    ActivityType, Attachment, Board, BoardMember, Collection, CountedList, Label, NewActivity,
    NewBoard, NewCard, NewCollection, NewColumn, User, UserRole, UserSummary,
};

use chrono::{Duration, Utc};

fn user(id: &str, name: &str, email: &str, initials: &str, role: UserRole) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: Some(email.to_string()),
        initials: initials.to_string(),
        avatar: None,
        role,
    }
}

pub fn users() -> Vec<User> {
    vec![
        user("user-1", "Alice Nguyen", "alice@example.com", "AN", UserRole::Admin),
        user("user-2", "Ben Tran", "ben@example.com", "BT", UserRole::Editor),
        user("user-3", "Chloe Le", "chloe@example.com", "CL", UserRole::Viewer),
        user("user-4", "David Pham", "david@example.com", "DP", UserRole::Editor),
        user("user-5", "Emma Hoang", "emma@example.com", "EH", UserRole::Editor),
    ]
}

fn card(title: &str, description: &str, labels: &[&str], assignees: &[&User]) -> NewCard {
    NewCard {
        description: description.to_string(),
        labels: labels.iter().map(|c| Label::from_color(*c)).collect(),
        members: assignees.iter().map(|u| UserSummary::from(*u)).collect(),
        ..NewCard::titled(title)
    }
}

fn column(name: &str, cards: Vec<NewCard>) -> NewColumn {
    NewColumn {
        name: name.to_string(),
        cards,
    }
}

fn website_board(users: &[User]) -> NewBoard {
    let (alice, ben, chloe, david, emma) = (&users[0], &users[1], &users[2], &users[3], &users[4]);

    let mut logo = card(
        "Design logo",
        "New logo for the refreshed brand",
        &["#61bd4f", "#f2d600"],
        &[alice, ben],
    );
    logo.due_date = Some("2025-05-15".to_string());
    logo.comments = 3;
    logo.attachments = CountedList::from_items(vec![Attachment {
        id: "attachment-1".to_string(),
        name: "logo-draft.png".to_string(),
        url: "https://example.com/files/logo-draft.png".to_string(),
        date: "2025-05-01".to_string(),
    }]);

    let mut copy = card(
        "Write copy",
        "Home and about page copy",
        &["#eb5a46"],
        &[david, emma],
    );
    copy.attachments = CountedList::from_count(1);

    NewBoard {
        description: "Full redesign of the company website with the new brand".to_string(),
        color: "#3b82f6".to_string(),
        members: CountedList::from_items(
            [alice, ben, chloe, david, emma]
                .into_iter()
                .map(BoardMember::from)
                .collect(),
        ),
        columns: vec![
            column(
                "To Do",
                vec![
                    logo,
                    card(
                        "Competitor analysis",
                        "Research and compare competitor sites",
                        &["#ff9f1a"],
                        &[chloe],
                    ),
                    card("Content plan", "Plan the site content", &[], &[david]),
                ],
            ),
            column(
                "In Progress",
                vec![
                    copy,
                    card(
                        "Home page UI",
                        "Design the home page layout",
                        &["#c377e0", "#0079bf"],
                        &[ben],
                    ),
                ],
            ),
            column(
                "Done",
                vec![card(
                    "User survey",
                    "Collect feedback on the current site",
                    &["#61bd4f"],
                    &[alice],
                )],
            ),
        ],
        ..NewBoard::named("Website Redesign")
    }
}

fn mobile_board(users: &[User]) -> NewBoard {
    let (alice, ben, emma) = (&users[0], &users[1], &users[4]);

    NewBoard {
        description: "Companion app for iOS and Android".to_string(),
        color: "#10b981".to_string(),
        members: CountedList::from_items(
            [alice, ben, emma]
                .into_iter()
                .map(BoardMember::from)
                .collect(),
        ),
        columns: vec![
            column(
                "Backlog",
                vec![card(
                    "Push notifications",
                    "Notify users of board changes",
                    &["#0079bf"],
                    &[emma],
                )],
            ),
            column(
                "In Progress",
                vec![card("Login screen", "Email and password sign-in", &[], &[ben])],
            ),
            column("Done", Vec::new()),
        ],
        ..NewBoard::named("Mobile App")
    }
}

fn marketing_board(users: &[User]) -> NewBoard {
    NewBoard {
        description: "Q3 campaign planning".to_string(),
        color: "#f59e0b".to_string(),
        // Legacy boards only carried a member count
        members: CountedList::from_count(4),
        columns: vec![
            column(
                "Ideas",
                vec![card(
                    "Launch webinar",
                    "Product walkthrough for customers",
                    &["#f2d600"],
                    &[&users[2]],
                )],
            ),
            column("Scheduled", Vec::new()),
        ],
        ..NewBoard::named("Marketing Campaign")
    }
}

fn collection(name: &str, description: &str, color: &str, icon: &str) -> Collection {
    NewCollection {
        description: Some(description.to_string()),
        color: color.to_string(),
        icon: Some(icon.to_string()),
        ..NewCollection::named(name)
    }
    .into_collection()
}

fn assign(board: &mut Board, collection: &mut Collection) {
    board.collection_id = Some(collection.id.clone());
    collection.board_count += 1;
}

pub fn snapshot() -> Snapshot {
    let users = users();

    let mut website = website_board(&users).into_board();
    let mut mobile = mobile_board(&users).into_board();
    let mut marketing = marketing_board(&users).into_board();

    let mut design = collection("Design", "UI and UX projects", "#61bd4f", "D");
    let mut product = collection(
        "Product Development",
        "Product delivery pipeline",
        "#0079bf",
        "P",
    );
    let mut promotion = collection("Marketing", "Marketing activities", "#eb5a46", "M");

    assign(&mut website, &mut design);
    assign(&mut mobile, &mut product);
    assign(&mut marketing, &mut promotion);

    let activities = demo_activities(&users, &website, &mobile);

    Snapshot {
        boards: vec![website, mobile, marketing],
        collections: vec![design, product, promotion],
        activities,
        users,
    }
}

fn demo_activities(users: &[User], website: &Board, mobile: &Board) -> Vec<kb_core::Activity> {
    let now = Utc::now();
    let mut activities = Vec::new();

    let to_do = &website.columns[0];
    let in_progress = &website.columns[1];
    if let Some(logo) = to_do.cards.first() {
        let mut activity = NewActivity::new(
            UserSummary::from(&users[1]),
            ActivityType::Card,
            format!("added card \"{}\" to column \"{}\"", logo.title, to_do.name),
        )
        .board(&website.id, &website.name)
        .column(&to_do.id, &to_do.name)
        .card(&logo.id, &logo.title)
        .into_activity();
        activity.timestamp = now - Duration::hours(3);
        activities.push(activity);
    }

    if let Some(copy) = in_progress.cards.first() {
        let mut activity = NewActivity::new(
            UserSummary::from(&users[3]),
            ActivityType::Card,
            format!(
                "moved card \"{}\" from column \"{}\" to column \"{}\"",
                copy.title, to_do.name, in_progress.name
            ),
        )
        .board(&website.id, &website.name)
        .column(&in_progress.id, &in_progress.name)
        .card(&copy.id, &copy.title)
        .change(&to_do.name, &in_progress.name)
        .into_activity();
        activity.timestamp = now - Duration::hours(1);
        activities.push(activity);
    }

    let mut created = NewActivity::new(
        UserSummary::from(&users[0]),
        ActivityType::Board,
        format!("created board \"{}\"", mobile.name),
    )
    .board(&mobile.id, &mobile.name)
    .into_activity();
    created.timestamp = now - Duration::days(1);
    created.read = true;
    activities.push(created);

    activities
}
