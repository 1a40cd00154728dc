mod chat_flow;
mod helpers;
mod viewport_lifecycle;
