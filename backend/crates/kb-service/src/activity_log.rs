//! Activity builders for every recorded mutation.
//!
//! Each function returns the `NewActivity` for one event; the store stamps
//! the id and timestamp.

use kb_core::{
    ActivityType, Board, BoardMember, Card, Collection, Column, NewActivity, UserRole,
    UserSummary,
};

pub fn board_created(actor: &UserSummary, board: &Board) -> NewActivity {
    NewActivity::new(
        actor.clone(),
        ActivityType::Board,
        format!("created board \"{}\"", board.name),
    )
    .board(&board.id, &board.name)
}

/// Records the rename as before/after when the name changed.
pub fn board_updated(actor: &UserSummary, before: &Board, after: &Board) -> NewActivity {
    let activity = NewActivity::new(
        actor.clone(),
        ActivityType::Board,
        format!("updated board \"{}\"", after.name),
    )
    .board(&after.id, &after.name);

    if before.name != after.name {
        activity.change(&before.name, &after.name)
    } else {
        activity
    }
}

/// The board no longer exists, so the activity carries only its name.
pub fn board_deleted(actor: &UserSummary, board: &Board) -> NewActivity {
    let mut activity = NewActivity::new(
        actor.clone(),
        ActivityType::Board,
        format!("deleted board \"{}\"", board.name),
    );
    activity.board_name = Some(board.name.clone());
    activity
}

pub fn column_added(actor: &UserSummary, board: &Board, column: &Column) -> NewActivity {
    NewActivity::new(
        actor.clone(),
        ActivityType::Board,
        format!(
            "added column \"{}\" to board \"{}\"",
            column.name, board.name
        ),
    )
    .board(&board.id, &board.name)
    .column(&column.id, &column.name)
}

pub fn column_renamed(
    actor: &UserSummary,
    board: &Board,
    before: &Column,
    after: &Column,
) -> NewActivity {
    NewActivity::new(
        actor.clone(),
        ActivityType::Board,
        format!("renamed column \"{}\" to \"{}\"", before.name, after.name),
    )
    .board(&board.id, &board.name)
    .column(&after.id, &after.name)
    .change(&before.name, &after.name)
}

pub fn column_deleted(actor: &UserSummary, board: &Board, column: &Column) -> NewActivity {
    NewActivity::new(
        actor.clone(),
        ActivityType::Board,
        format!(
            "deleted column \"{}\" from board \"{}\"",
            column.name, board.name
        ),
    )
    .board(&board.id, &board.name)
    .column(&column.id, &column.name)
}

pub fn card_added(actor: &UserSummary, board: &Board, column: &Column, card: &Card) -> NewActivity {
    NewActivity::new(
        actor.clone(),
        ActivityType::Card,
        format!(
            "added card \"{}\" to column \"{}\" on board \"{}\"",
            card.title, column.name, board.name
        ),
    )
    .board(&board.id, &board.name)
    .column(&column.id, &column.name)
    .card(&card.id, &card.title)
}

pub fn card_renamed(
    actor: &UserSummary,
    board: &Board,
    column: &Column,
    before: &Card,
    after: &Card,
) -> NewActivity {
    NewActivity::new(
        actor.clone(),
        ActivityType::Card,
        format!("renamed card \"{}\" to \"{}\"", before.title, after.title),
    )
    .board(&board.id, &board.name)
    .column(&column.id, &column.name)
    .card(&after.id, &after.title)
    .change(&before.title, &after.title)
}

pub fn card_deleted(
    actor: &UserSummary,
    board: &Board,
    column: &Column,
    card: &Card,
) -> NewActivity {
    NewActivity::new(
        actor.clone(),
        ActivityType::Card,
        format!(
            "deleted card \"{}\" from column \"{}\"",
            card.title, column.name
        ),
    )
    .board(&board.id, &board.name)
    .column(&column.id, &column.name)
    .card(&card.id, &card.title)
}

/// `before` and `after` hold the source and destination column names.
pub fn card_moved(
    actor: &UserSummary,
    board: &Board,
    source: &Column,
    destination: &Column,
    card: &Card,
) -> NewActivity {
    let action = if source.id == destination.id {
        format!(
            "moved card \"{}\" within column \"{}\"",
            card.title, source.name
        )
    } else {
        format!(
            "moved card \"{}\" from column \"{}\" to column \"{}\"",
            card.title, source.name, destination.name
        )
    };

    NewActivity::new(actor.clone(), ActivityType::Card, action)
        .board(&board.id, &board.name)
        .column(&destination.id, &destination.name)
        .card(&card.id, &card.title)
        .change(&source.name, &destination.name)
}

pub fn collection_created(actor: &UserSummary, collection: &Collection) -> NewActivity {
    NewActivity::new(
        actor.clone(),
        ActivityType::Other,
        format!("created collection \"{}\"", collection.name),
    )
}

pub fn collection_renamed(
    actor: &UserSummary,
    before: &Collection,
    after: &Collection,
) -> NewActivity {
    NewActivity::new(
        actor.clone(),
        ActivityType::Other,
        format!(
            "renamed collection \"{}\" to \"{}\"",
            before.name, after.name
        ),
    )
    .change(&before.name, &after.name)
}

pub fn collection_deleted(actor: &UserSummary, collection: &Collection) -> NewActivity {
    NewActivity::new(
        actor.clone(),
        ActivityType::Other,
        format!("deleted collection \"{}\"", collection.name),
    )
}

pub fn board_added_to_collection(
    actor: &UserSummary,
    board: &Board,
    collection: &Collection,
) -> NewActivity {
    NewActivity::new(
        actor.clone(),
        ActivityType::Board,
        format!(
            "added board \"{}\" to collection \"{}\"",
            board.name, collection.name
        ),
    )
    .board(&board.id, &board.name)
}

pub fn board_removed_from_collection(
    actor: &UserSummary,
    board: &Board,
    collection: &Collection,
) -> NewActivity {
    NewActivity::new(
        actor.clone(),
        ActivityType::Board,
        format!(
            "removed board \"{}\" from collection \"{}\"",
            board.name, collection.name
        ),
    )
    .board(&board.id, &board.name)
}

pub fn member_added(actor: &UserSummary, board: &Board, member: &BoardMember) -> NewActivity {
    NewActivity::new(
        actor.clone(),
        ActivityType::Member,
        format!("added {} to board \"{}\"", member.name, board.name),
    )
    .board(&board.id, &board.name)
}

pub fn member_role_changed(
    actor: &UserSummary,
    board: &Board,
    member: &BoardMember,
    previous: UserRole,
) -> NewActivity {
    NewActivity::new(
        actor.clone(),
        ActivityType::Member,
        format!(
            "changed role of {} on board \"{}\" to {}",
            member.name, board.name, member.role
        ),
    )
    .board(&board.id, &board.name)
    .change(previous.as_str(), member.role.as_str())
}

pub fn member_removed(actor: &UserSummary, board: &Board, member: &BoardMember) -> NewActivity {
    NewActivity::new(
        actor.clone(),
        ActivityType::Member,
        format!("removed {} from board \"{}\"", member.name, board.name),
    )
    .board(&board.id, &board.name)
}
