//! Seeded sample inbox.

use chrono::{Duration, Utc};

use super::model::{Email, EmailId, Sender};

/// Returns the deterministic sample inbox, newest first.
///
/// Two messages carry reply threads; the design-review thread includes a
/// follow-up from the original sender so reply-all recipient collapsing has
/// something to collapse.
pub(super) fn sample_inbox() -> Vec<Email> {
    let now = Utc::now();

    vec![
        Email::new(
            EmailId(1),
            Sender::new("Jonas Weber", "jonas@example.com"),
            "Your package is out for delivery",
            "Good news: the courier picked up your parcel this morning and it \
             should arrive between 14:00 and 18:00 today.\n\nNo signature is \
             required. If you will not be home, the driver will leave it with \
             the front desk.",
            now - Duration::minutes(25),
        ),
        Email::new(
            EmailId(2),
            Sender::new("Maya Lindqvist", "maya@example.com"),
            "Design review moved to Thursday",
            "Heads up, I had to move the design review to Thursday at 10:00. \
             The conference room was double-booked and Thursday was the only \
             slot where everyone is free.\n\nSame agenda as before. Please \
             have the updated mocks in the shared folder by Wednesday evening.",
            now - Duration::hours(2),
        )
        .with_replies(vec![
            Email::new(
                EmailId(101),
                Sender::new("Tomas Rivera", "tomas@example.com"),
                "Design review moved to Thursday",
                "Thursday works for me. I will bring the print proofs so we \
                 can compare them against the screen versions.",
                now - Duration::minutes(95),
            ),
            Email::new(
                EmailId(102),
                Sender::new("Maya Lindqvist", "maya@example.com"),
                "Design review moved to Thursday",
                "Perfect. I booked the large room for two hours so we are not \
                 rushed this time.",
                now - Duration::minutes(70),
            ),
        ]),
        Email::new(
            EmailId(3),
            Sender::new("Priya Nair", "priya@example.com"),
            "Quarterly planning notes",
            "Notes from this morning are attached to the wiki page. Short \
             version: we are keeping the March release date, dropping the \
             importer rewrite, and pulling the onboarding work forward.\n\n\
             Flag anything that looks wrong by Friday and I will fold it into \
             the final version.",
            now - Duration::hours(4),
        ),
        Email::new(
            EmailId(4),
            Sender::new("Hana Sato", "hana@example.com"),
            "Climbing on Saturday?",
            "A few of us are heading to the north wall on Saturday morning, \
             leaving around 8. There is room in the car for one more if you \
             want in. Weather looks good so far.",
            now - Duration::hours(7),
        )
        .with_replies(vec![Email::new(
            EmailId(103),
            Sender::new("Derek Okafor", "derek@example.com"),
            "Climbing on Saturday?",
            "Count me in. I can take a second car if more people sign up, \
             just let me know by Friday evening.",
            now - Duration::hours(6),
        )]),
        Email {
            starred: true,
            ..Email::new(
                EmailId(5),
                Sender::new("Cleo Marchetti", "cleo@example.com"),
                "Itinerary for the Copenhagen trip",
                "Flights are booked. We leave Tuesday at 07:40 and land at \
                 10:15, return Friday evening. The hotel is a ten minute walk \
                 from the venue.\n\nBooking references and the full itinerary \
                 are in the usual folder. Remember to bring the adapter this \
                 time.",
                now - Duration::hours(26),
            )
        },
        Email::new(
            EmailId(6),
            Sender::new("Derek Okafor", "derek@example.com"),
            "Invoice 2481 from the studio",
            "Invoice 2481 for the October session is ready. Payment terms are \
             thirty days as usual. Shout if the line items look off and I \
             will send a corrected copy.",
            now - Duration::hours(31),
        ),
        Email::new(
            EmailId(7),
            Sender::new("Sam Whitaker", "sam@example.com"),
            "Book club picks for September",
            "Votes are in. September is the translated short story \
             collection, with the sailing memoir as backup if people cannot \
             find copies. First meeting is the 9th at the usual cafe.",
            now - Duration::days(2),
        ),
        Email::new(
            EmailId(8),
            Sender::new("Noor Haddad", "noor@example.com"),
            "Welcome to the measurement beta",
            "Thanks for signing up for the beta. Your workspace is live and \
             the starter guide covers the first import. Reply to this message \
             if anything breaks, the team reads every report.",
            now - Duration::days(3),
        ),
    ]
}
