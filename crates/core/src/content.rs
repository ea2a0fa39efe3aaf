//! Fixed content: the seed profile and projects, and the placeholder profile
//! served before anything has been seeded.

use std::collections::BTreeMap;

use crate::schema::{Profile, Project};

/// Profile returned by `GET /profile` while the profile collection is empty.
/// Clients rely on these exact values.
pub fn placeholder_profile() -> Profile {
    Profile {
        name: "Your Name".into(),
        title: "Software Engineer".into(),
        location: Some(String::new()),
        bio: Some("Add your bio from the backend seed endpoint.".into()),
        avatar: Some("https://i.pravatar.cc/300".into()),
        socials: Some(BTreeMap::new()),
    }
}

/// Profile inserted by the seeding routine.
pub fn demo_profile() -> Profile {
    Profile {
        name: "Alex Johnson".into(),
        title: "Software Engineer".into(),
        location: Some("San Francisco, CA".into()),
        bio: Some(
            "I build reliable web apps with React, TypeScript, and Python. \
             I care about performance, DX, and pixel-perfect UI."
                .into(),
        ),
        avatar: Some("https://i.pravatar.cc/300?img=5".into()),
        socials: Some(BTreeMap::from([
            ("github".to_string(), "https://github.com/example".to_string()),
            (
                "linkedin".to_string(),
                "https://www.linkedin.com/in/example/".to_string(),
            ),
            ("twitter".to_string(), "https://x.com/example".to_string()),
        ])),
    }
}

/// Projects inserted by the seeding routine, in insertion order.
pub fn demo_projects() -> Vec<Project> {
    vec![
        project(
            "Realtime Chat",
            "Socket.io chat with rooms, typing indicators, and message receipts.",
            &["React", "Node", "Socket.io", "Tailwind"],
            "https://github.com/example/realtime-chat",
            "https://chat.example.com",
            "https://images.unsplash.com/photo-1526358269546-0f5a3aee4c08?q=80&w=1200&auto=format&fit=crop",
        ),
        project(
            "AI Markdown Notes",
            "GPT-assisted markdown editor with embeddings and semantic search.",
            &["Next.js", "OpenAI", "Prisma", "Postgres"],
            "https://github.com/example/ai-notes",
            "https://notes.example.com",
            "https://images.unsplash.com/photo-1522071820081-009f0129c71c?q=80&w=1200&auto=format&fit=crop",
        ),
        project(
            "E-commerce Starter",
            "Headless commerce with Stripe, webhooks, and admin dashboard.",
            &["Remix", "Stripe", "Planetscale", "Tailwind"],
            "https://github.com/example/commerce-starter",
            "https://shop.example.com",
            "https://images.unsplash.com/photo-1540390769620-2d09bda0e6f3?q=80&w=1200&auto=format&fit=crop",
        ),
    ]
}

fn project(
    title: &str,
    description: &str,
    tags: &[&str],
    repo_url: &str,
    live_url: &str,
    image: &str,
) -> Project {
    Project {
        title: title.into(),
        description: description.into(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        repo_url: Some(repo_url.into()),
        live_url: Some(live_url.into()),
        image: Some(image.into()),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::schema::Schema;

    #[test]
    fn placeholder_profile_has_exact_shape() {
        let json = serde_json::to_value(placeholder_profile()).unwrap();
        assert_eq!(
            json,
            json!({
                "name": "Your Name",
                "title": "Software Engineer",
                "location": "",
                "bio": "Add your bio from the backend seed endpoint.",
                "avatar": "https://i.pravatar.cc/300",
                "socials": {}
            })
        );
    }

    #[test]
    fn seed_content_passes_validation() {
        assert!(demo_profile().validated().is_ok());
        for project in demo_projects() {
            assert!(project.validated().is_ok());
        }
    }

    #[test]
    fn demo_projects_keep_their_order() {
        let titles: Vec<String> = demo_projects().into_iter().map(|p| p.title).collect();
        assert_eq!(
            titles,
            ["Realtime Chat", "AI Markdown Notes", "E-commerce Starter"]
        );
    }
}
