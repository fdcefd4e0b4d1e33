//! Tests for Slack conversations client.
