// Built-in demo network, used when `postlens graph` gets no input file.

use super::model::{Comment, NetworkData, PostRecord};

fn comment(user: &str, content: &str, timestamp: &str) -> Comment {
    Comment {
        user: user.to_string(),
        content: content.to_string(),
        timestamp: timestamp.to_string(),
    }
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Four users and three posts with a mix of views and comments.
pub fn sample_network() -> NetworkData {
    let mut data = NetworkData {
        users: ["alice", "bob", "carol", "dave"]
            .into_iter()
            .map(String::from)
            .collect(),
        ..Default::default()
    };

    data.posts.insert(
        "post1".to_string(),
        PostRecord {
            author: "alice".to_string(),
            views: names(&["bob", "carol", "dave"]),
            comments: vec![comment("bob", "Nice post!", "2025-07-20T10:00")],
        },
    );
    data.posts.insert(
        "post2".to_string(),
        PostRecord {
            author: "bob".to_string(),
            views: names(&["alice", "carol"]),
            comments: vec![
                comment("alice", "Interesting...", "2025-07-21T11:00"),
                comment("carol", "I agree with Bob.", "2025-07-20T10:05"),
            ],
        },
    );
    data.posts.insert(
        "post3".to_string(),
        PostRecord {
            author: "carol".to_string(),
            views: names(&["dave"]),
            comments: vec![],
        },
    );

    data
}
