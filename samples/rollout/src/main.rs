//! Staged feature rollout demo.
//!
//! Three checkout behaviors sit behind toggle points: beta testers get the
//! rewritten paths while every other session stays on the defaults. One
//! toggle per calling convention, so the demo exercises plain calls,
//! future-returning calls and lazy result pages.

use std::time::Duration;

use togglepoint::sequence::{Sequence, from_iter};
use togglepoint::toggle::{AsyncMode, GeneratorMode, ToggleConfig};
use togglepoint::toggle_point;

struct Session {
    user: &'static str,
    beta_tester: bool,
}

#[tokio::main]
async fn main() {
    let sessions = [
        Session {
            user: "ada",
            beta_tester: true,
        },
        Session {
            user: "grace",
            beta_tester: false,
        },
    ];

    // Pricing: the rewrite doubles the discount.
    let price = toggle_point(
        |_: &Session, cents: i64| cents - cents / 20,
        ToggleConfig::new(
            |session: &Session, _: &i64| session.beta_tester,
            |_: &Session, cents: i64| cents - cents / 10,
        ),
    );

    // Recommendations: the default path asks a slow upstream, the rewrite
    // answers from a local model.
    let recommend = toggle_point(
        |session: &Session, count: usize| {
            let user = session.user;
            async move {
                tokio::time::sleep(Duration::from_millis(50)).await;
                (1..=count)
                    .map(|rank| format!("{user}-classic-{rank}"))
                    .collect::<Vec<_>>()
            }
        },
        ToggleConfig::new(
            |session: &Session, _: &usize| std::future::ready(session.beta_tester),
            |_: &Session, count: usize| async move {
                (1..=count)
                    .map(|rank| format!("fresh-{rank}"))
                    .collect::<Vec<_>>()
            },
        )
        .mode::<AsyncMode>(),
    );

    // Result pages: the rewrite reranks, and pages stream lazily either way.
    let pages = toggle_point(
        |_: &Session, total: u32| {
            let titles: Vec<_> = (1..=total).map(|page| format!("page-{page}")).collect();
            from_iter(titles, total)
        },
        ToggleConfig::new(
            |session: &Session, _: &u32| session.beta_tester,
            |_: &Session, total: u32| {
                let titles: Vec<_> = (1..=total)
                    .rev()
                    .map(|page| format!("reranked-{page}"))
                    .collect();
                from_iter(titles, total)
            },
        )
        .mode::<GeneratorMode>(),
    );

    for session in &sessions {
        let track = if session.beta_tester { "beta" } else { "stable" };
        println!("{} ({track})", session.user);

        println!("  pays {} cents", price.call(session, 1000));

        for title in recommend.call(session, 2).await {
            println!("  recommends {title}");
        }

        // Walk two pages, then abandon the rest of the stream.
        let mut walked = pages.call(session, 5).values();
        for title in walked.by_ref().take(2) {
            println!("  shows {title}");
        }
        println!("  (remaining pages never rendered)");
    }
}
