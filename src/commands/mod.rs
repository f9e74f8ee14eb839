/*!
Command handlers for the CLI

This module provides command handlers invoked by the CLI entrypoint:

- `chat`     — Interactive chat demo (local mock or remote backend)
- `analyze`  — Analyze a website and start a session
- `generate` — Generate an article for a session
- `ask`      — One-shot chat message to the backend

The handlers are intentionally small and use the library components:
the responder engine, the chat session, and the API client.
*/

pub mod analyze;
pub mod ask;
pub mod chat;
pub mod generate;
