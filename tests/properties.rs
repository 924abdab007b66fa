use std::cmp::Ordering;
use std::collections::HashSet;

use kanboard::grouping::{group_tickets, GroupingKey};
use kanboard::identity::{color_of, initials_of, PALETTE};
use kanboard::model::{Ticket, User};
use kanboard::sorting::{compare_titles, sort_tickets, SortingKey};
use proptest::prelude::*;

const STATUSES: [&str; 6] = ["Todo", "In progress", "Done", "Backlog", "Canceled", "Blocked"];
const USER_IDS: [&str; 4] = ["usr-1", "usr-2", "usr-3", "ghost"];
const TITLES: [&str; 8] = ["apple", "Apple", "Banana", "banana", "Éclair", "eclair", "résumé", "resume"];

fn users() -> Vec<User> {
    vec![
        User::new("usr-1", "Anoop sharma"),
        User::new("usr-2", "Yogesh"),
        User::new("usr-3", "Shankar Kumar"),
    ]
}

fn arb_tickets() -> impl Strategy<Value = Vec<Ticket>> {
    prop::collection::vec(
        (
            0..STATUSES.len(),
            0i64..=4,
            prop::option::of(0..USER_IDS.len()),
            0..TITLES.len(),
        ),
        0..40,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(index, (status, priority, user, title))| {
                let ticket = Ticket::new(format!("CAM-{index}"), TITLES[title], STATUSES[status], priority);
                match user {
                    Some(user) => ticket.with_user(USER_IDS[user]),
                    None => ticket,
                }
            })
            .collect()
    })
}

fn arb_grouping() -> impl Strategy<Value = GroupingKey> {
    prop::sample::select(GroupingKey::ALL.to_vec())
}

fn position(tickets: &[Ticket], id: &str) -> usize {
    tickets
        .iter()
        .position(|ticket| ticket.id == id)
        .expect("ticket from input")
}

#[test]
fn colors_spread_over_the_whole_palette() {
    let colors: HashSet<_> = (0..100).map(|n| color_of(&format!("user-{n}"))).collect();
    assert_eq!(colors.len(), PALETTE.len());

    let names = ["Anoop sharma", "Yogesh", "Shankar Kumar", "Ramesh", "Suresh", "Neha Kumari"];
    let distinct: HashSet<_> = names.iter().map(|name| color_of(name)).collect();
    assert!(distinct.len() > 1);
}

proptest! {
    #[test]
    fn grouping_is_a_partition(tickets in arb_tickets(), key in arb_grouping()) {
        let users = users();
        let groups = group_tickets(&tickets, &users, key).expect("valid priorities");

        let total: usize = groups.iter().map(|group| group.tickets.len()).sum();
        prop_assert_eq!(total, tickets.len());

        let mut seen = HashSet::new();
        for group in &groups {
            prop_assert!(!group.tickets.is_empty());
            for ticket in &group.tickets {
                prop_assert!(seen.insert(ticket.id.clone()));
            }
        }
    }

    #[test]
    fn groups_keep_input_order(tickets in arb_tickets(), key in arb_grouping()) {
        let users = users();
        let groups = group_tickets(&tickets, &users, key).expect("valid priorities");

        for group in &groups {
            let positions: Vec<usize> = group
                .tickets
                .iter()
                .map(|ticket| position(&tickets, &ticket.id))
                .collect();
            prop_assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        }

        // Group order is the order in which each label first appears.
        let firsts: Vec<usize> = groups
            .iter()
            .map(|group| position(&tickets, &group.tickets[0].id))
            .collect();
        prop_assert!(firsts.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn priority_sort_is_descending_and_stable(tickets in arb_tickets()) {
        let refs: Vec<&Ticket> = tickets.iter().collect();
        let sorted = sort_tickets(&refs, SortingKey::Priority);
        prop_assert_eq!(sorted.len(), tickets.len());

        for pair in sorted.windows(2) {
            prop_assert!(pair[0].priority >= pair[1].priority);
            if pair[0].priority == pair[1].priority {
                prop_assert!(position(&tickets, &pair[0].id) < position(&tickets, &pair[1].id));
            }
        }
    }

    #[test]
    fn title_sort_is_ascending_and_stable(tickets in arb_tickets()) {
        let refs: Vec<&Ticket> = tickets.iter().collect();
        let sorted = sort_tickets(&refs, SortingKey::Title);
        prop_assert_eq!(sorted.len(), tickets.len());

        for pair in sorted.windows(2) {
            let ordering = compare_titles(&pair[0].title, &pair[1].title);
            prop_assert_ne!(ordering, Ordering::Greater);
            if ordering == Ordering::Equal {
                prop_assert!(position(&tickets, &pair[0].id) < position(&tickets, &pair[1].id));
            }
        }
    }

    #[test]
    fn sorting_leaves_input_untouched(tickets in arb_tickets()) {
        let refs: Vec<&Ticket> = tickets.iter().collect();
        let before: Vec<String> = refs.iter().map(|ticket| ticket.id.clone()).collect();
        let _ = sort_tickets(&refs, SortingKey::Title);
        let after: Vec<String> = refs.iter().map(|ticket| ticket.id.clone()).collect();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn color_is_deterministic_and_from_palette(name in "\\PC{0,24}") {
        let color = color_of(&name);
        prop_assert_eq!(color, color_of(&name));
        prop_assert!(PALETTE.contains(&color));
    }

    #[test]
    fn initials_take_one_letter_per_word(words in prop::collection::vec("[a-z]{1,8}", 1..5)) {
        let name = words.join(" ");
        let initials = initials_of(&name).expect("non-empty name");
        prop_assert_eq!(initials.chars().count(), words.len());
        prop_assert_eq!(initials.clone(), initials.to_uppercase());
    }
}
