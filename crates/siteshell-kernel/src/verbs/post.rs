//! post — list, create, and delete posts.

use siteshell_types::ShellError;

use crate::backend::{NewPost, SiteBackend, StoreError};

const MENU: &str = "Available post commands:
  list          - List posts
  create        - Create a new post
  delete        - Delete a post
";

pub async fn run(args: &[String], backend: &dyn SiteBackend) -> Result<String, ShellError> {
    let Some((action, rest)) = args.split_first() else {
        return Ok(MENU.to_string());
    };

    match action.as_str() {
        "list" => {
            let mut out = String::from("Posts:\n\n");
            for post in backend.list_posts().await {
                out.push_str(&format!(
                    "{} (ID: {}) - {}\n",
                    post.title, post.id, post.status
                ));
            }
            Ok(out)
        }

        "create" => {
            if rest.len() < 2 {
                return Ok("Usage: post create <title> <content>\n".to_string());
            }
            let post = NewPost {
                title: rest[0].clone(),
                content: rest[1].clone(),
            };
            match backend.create_post(post).await {
                Ok(_) => Ok("Post created successfully.\n".to_string()),
                Err(err) => Err(ShellError::Domain(format!("Error creating post: {err}"))),
            }
        }

        "delete" => {
            let Some(raw_id) = rest.first() else {
                return Ok("Usage: post delete <post-id>\n".to_string());
            };
            // Non-numeric input degrades to id 0, which never exists
            let id: u64 = raw_id.parse().unwrap_or(0);
            match backend.delete_post(id).await {
                Ok(()) => Ok("Post deleted successfully.\n".to_string()),
                Err(StoreError::NotFound(_)) => {
                    Ok("Post not found or error deleting.\n".to_string())
                }
                Err(err) => Err(ShellError::Domain(err.to_string())),
            }
        }

        other => Ok(format!("Unknown post command: {other}\n")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryBackend;

    fn args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn create_then_list_shows_published_post() {
        let backend = MemoryBackend::new();
        let out = run(&args(&["create", "First Post", "Some content"]), &backend)
            .await
            .unwrap();
        assert_eq!(out, "Post created successfully.\n");

        let out = run(&args(&["list"]), &backend).await.unwrap();
        assert_eq!(out, "Posts:\n\nFirst Post (ID: 1) - publish\n");
    }

    #[tokio::test]
    async fn create_with_one_arg_is_a_usage_line() {
        let backend = MemoryBackend::new();
        let out = run(&args(&["create", "Only Title"]), &backend).await.unwrap();
        assert_eq!(out, "Usage: post create <title> <content>\n");
    }

    #[tokio::test]
    async fn delete_non_numeric_id_is_a_miss() {
        let backend = MemoryBackend::new();
        run(&args(&["create", "T", "C"]), &backend).await.unwrap();

        let out = run(&args(&["delete", "abc"]), &backend).await.unwrap();
        assert_eq!(out, "Post not found or error deleting.\n");
        assert_eq!(backend.list_posts().await.len(), 1);
    }

    #[tokio::test]
    async fn delete_by_id_removes_the_post() {
        let backend = MemoryBackend::new();
        run(&args(&["create", "T", "C"]), &backend).await.unwrap();

        let out = run(&args(&["delete", "1"]), &backend).await.unwrap();
        assert_eq!(out, "Post deleted successfully.\n");
        assert!(backend.list_posts().await.is_empty());
    }
}
