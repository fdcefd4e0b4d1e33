//! Conversations service implementation.

use super::*;
use crate::config::SlackToken;
use crate::context::RequestContext;
use crate::errors::{SlackError, SlackResult};
use crate::observability::{create_request_span, record_error, record_success};
use crate::pagination::{CursorPage, CursorPager};
use crate::transport::{decode_envelope, ApiRequest, FormFields, FormRequest, HttpTransport};
use crate::types::{Channel, ChannelId, ChannelType, Cursor, EmptyPayload, SlackResponse, UserId};
use async_trait::async_trait;
use futures::FutureExt;
use http::HeaderMap;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, instrument, warn, Instrument};

/// Trait for conversations service operations.
///
/// Every operation has a `*_with_context` form that honours the caller's
/// cancellation token and deadline, and a plain form that runs under
/// [`RequestContext::background`].
#[async_trait]
pub trait ConversationsServiceTrait: Send + Sync {
    /// List the members of a conversation, one page at a time
    async fn members_with_context(
        &self,
        ctx: &RequestContext,
        request: ConversationMembersRequest,
    ) -> SlackResult<CursorPage<UserId>>;

    /// Archive a conversation
    async fn archive_with_context(
        &self,
        ctx: &RequestContext,
        request: ArchiveConversationRequest,
    ) -> SlackResult<()>;

    /// Unarchive a conversation
    async fn unarchive_with_context(
        &self,
        ctx: &RequestContext,
        request: UnarchiveConversationRequest,
    ) -> SlackResult<()>;

    /// Set conversation topic
    async fn set_topic_with_context(
        &self,
        ctx: &RequestContext,
        request: SetConversationTopicRequest,
    ) -> SlackResult<Channel>;

    /// Set conversation purpose
    async fn set_purpose_with_context(
        &self,
        ctx: &RequestContext,
        request: SetConversationPurposeRequest,
    ) -> SlackResult<Channel>;

    /// Rename a conversation
    async fn rename_with_context(
        &self,
        ctx: &RequestContext,
        request: RenameConversationRequest,
    ) -> SlackResult<Channel>;

    /// Invite users to a conversation
    async fn invite_with_context(
        &self,
        ctx: &RequestContext,
        request: InviteToConversationRequest,
    ) -> SlackResult<Channel>;

    /// Kick a user from a conversation
    async fn kick_with_context(
        &self,
        ctx: &RequestContext,
        request: KickFromConversationRequest,
    ) -> SlackResult<()>;

    /// Close a DM or MPIM
    async fn close_with_context(
        &self,
        ctx: &RequestContext,
        request: CloseConversationRequest,
    ) -> SlackResult<CloseConversationResponse>;

    /// Create a new channel
    async fn create_with_context(
        &self,
        ctx: &RequestContext,
        request: CreateConversationRequest,
    ) -> SlackResult<Channel>;

    /// Get conversation info
    async fn info_with_context(
        &self,
        ctx: &RequestContext,
        request: ConversationInfoRequest,
    ) -> SlackResult<Channel>;

    /// Join a public channel
    async fn join_with_context(
        &self,
        ctx: &RequestContext,
        request: JoinConversationRequest,
    ) -> SlackResult<Channel>;

    /// Leave a conversation
    async fn leave_with_context(
        &self,
        ctx: &RequestContext,
        request: LeaveConversationRequest,
    ) -> SlackResult<LeaveConversationResponse>;

    /// List conversations, one page at a time
    async fn list_with_context(
        &self,
        ctx: &RequestContext,
        request: ListConversationsRequest,
    ) -> SlackResult<CursorPage<Channel>>;

    /// List the members of a conversation, one page at a time
    async fn members(&self, request: ConversationMembersRequest) -> SlackResult<CursorPage<UserId>> {
        self.members_with_context(&RequestContext::background(), request)
            .await
    }

    /// Archive a conversation
    async fn archive(&self, request: ArchiveConversationRequest) -> SlackResult<()> {
        self.archive_with_context(&RequestContext::background(), request)
            .await
    }

    /// Unarchive a conversation
    async fn unarchive(&self, request: UnarchiveConversationRequest) -> SlackResult<()> {
        self.unarchive_with_context(&RequestContext::background(), request)
            .await
    }

    /// Set conversation topic
    async fn set_topic(&self, request: SetConversationTopicRequest) -> SlackResult<Channel> {
        self.set_topic_with_context(&RequestContext::background(), request)
            .await
    }

    /// Set conversation purpose
    async fn set_purpose(&self, request: SetConversationPurposeRequest) -> SlackResult<Channel> {
        self.set_purpose_with_context(&RequestContext::background(), request)
            .await
    }

    /// Rename a conversation
    async fn rename(&self, request: RenameConversationRequest) -> SlackResult<Channel> {
        self.rename_with_context(&RequestContext::background(), request)
            .await
    }

    /// Invite users to a conversation
    async fn invite(&self, request: InviteToConversationRequest) -> SlackResult<Channel> {
        self.invite_with_context(&RequestContext::background(), request)
            .await
    }

    /// Kick a user from a conversation
    async fn kick(&self, request: KickFromConversationRequest) -> SlackResult<()> {
        self.kick_with_context(&RequestContext::background(), request)
            .await
    }

    /// Close a DM or MPIM
    async fn close(&self, request: CloseConversationRequest) -> SlackResult<CloseConversationResponse> {
        self.close_with_context(&RequestContext::background(), request)
            .await
    }

    /// Create a new channel
    async fn create(&self, request: CreateConversationRequest) -> SlackResult<Channel> {
        self.create_with_context(&RequestContext::background(), request)
            .await
    }

    /// Get conversation info
    async fn info(&self, request: ConversationInfoRequest) -> SlackResult<Channel> {
        self.info_with_context(&RequestContext::background(), request)
            .await
    }

    /// Join a public channel
    async fn join(&self, request: JoinConversationRequest) -> SlackResult<Channel> {
        self.join_with_context(&RequestContext::background(), request)
            .await
    }

    /// Leave a conversation
    async fn leave(&self, request: LeaveConversationRequest) -> SlackResult<LeaveConversationResponse> {
        self.leave_with_context(&RequestContext::background(), request)
            .await
    }

    /// List conversations, one page at a time
    async fn list(&self, request: ListConversationsRequest) -> SlackResult<CursorPage<Channel>> {
        self.list_with_context(&RequestContext::background(), request)
            .await
    }
}

/// Conversations service implementation
#[derive(Clone)]
pub struct ConversationsService {
    transport: Arc<dyn HttpTransport>,
    token: SlackToken,
    base_url: String,
    headers: HeaderMap,
}

impl ConversationsService {
    /// Create a new conversations service
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        token: SlackToken,
        base_url: String,
        headers: HeaderMap,
    ) -> Self {
        Self {
            transport,
            token,
            base_url,
            headers,
        }
    }

    fn build_url(&self, method: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), method)
    }

    /// Issue one call and decode its envelope.
    ///
    /// The credential is always the first form field.
    async fn call<R, T>(&self, ctx: &RequestContext, request: &R) -> SlackResult<SlackResponse<T>>
    where
        R: ApiRequest + Sync,
        T: DeserializeOwned + Send,
    {
        let span = create_request_span(R::METHOD);

        let result: SlackResult<SlackResponse<T>> = async {
            let fields = FormFields::new()
                .text("token", self.token.expose())
                .merge(request.form_fields());
            let mut form = FormRequest::post(self.build_url(R::METHOD), self.headers.clone(), fields);
            if let Some(remaining) = ctx.remaining() {
                form = form.with_timeout(remaining);
            }

            let response = ctx.run(self.transport.send_form(form)).await?;
            let envelope = decode_envelope::<T>(&response.body)?;

            if let Some(warning) = &envelope.warning {
                warn!(method = R::METHOD, warning = %warning, "Slack API returned a warning");
            }
            Ok::<_, SlackError>(envelope)
        }
        .instrument(span.clone())
        .await;

        match &result {
            Ok(_) => record_success(&span),
            Err(e) => {
                debug!(method = R::METHOD, error = %e, "Slack API call failed");
                record_error(&span, &e.to_string());
            }
        }
        result
    }

    /// Pager over every member of `channel`
    pub fn members_pager(&self, channel: impl Into<ChannelId>, limit: u32) -> CursorPager<UserId> {
        let service = self.clone();
        let channel = channel.into();
        CursorPager::new(Box::new(move |cursor: Cursor| {
            let service = service.clone();
            let request = ConversationMembersRequest::new(channel.clone())
                .cursor(cursor)
                .limit(limit);
            async move { service.members(request).await }.boxed()
        }))
    }

    /// Pager over every conversation matching `types`
    pub fn list_pager(
        &self,
        types: &[ChannelType],
        exclude_archived: bool,
        limit: u32,
    ) -> CursorPager<Channel> {
        let service = self.clone();
        let types = types.to_vec();
        CursorPager::new(Box::new(move |cursor: Cursor| {
            let service = service.clone();
            let request = ListConversationsRequest::new()
                .cursor(cursor)
                .limit(limit)
                .exclude_archived(exclude_archived)
                .types(&types);
            async move { service.list(request).await }.boxed()
        }))
    }
}

impl std::fmt::Debug for ConversationsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversationsService")
            .field("token", &self.token)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl ConversationsServiceTrait for ConversationsService {
    #[instrument(skip(self, ctx, request), fields(channel = %request.channel))]
    async fn members_with_context(
        &self,
        ctx: &RequestContext,
        request: ConversationMembersRequest,
    ) -> SlackResult<CursorPage<UserId>> {
        let envelope = self
            .call::<_, ConversationMembersPayload>(ctx, &request)
            .await?;
        let next_cursor = envelope.next_cursor();
        Ok(CursorPage::new(envelope.data.members, next_cursor))
    }

    #[instrument(skip(self, ctx, request), fields(channel = %request.channel))]
    async fn archive_with_context(
        &self,
        ctx: &RequestContext,
        request: ArchiveConversationRequest,
    ) -> SlackResult<()> {
        self.call::<_, EmptyPayload>(ctx, &request).await?;
        Ok(())
    }

    #[instrument(skip(self, ctx, request), fields(channel = %request.channel))]
    async fn unarchive_with_context(
        &self,
        ctx: &RequestContext,
        request: UnarchiveConversationRequest,
    ) -> SlackResult<()> {
        self.call::<_, EmptyPayload>(ctx, &request).await?;
        Ok(())
    }

    #[instrument(skip(self, ctx, request), fields(channel = %request.channel))]
    async fn set_topic_with_context(
        &self,
        ctx: &RequestContext,
        request: SetConversationTopicRequest,
    ) -> SlackResult<Channel> {
        let envelope = self.call::<_, ChannelPayload>(ctx, &request).await?;
        Ok(envelope.data.channel)
    }

    #[instrument(skip(self, ctx, request), fields(channel = %request.channel))]
    async fn set_purpose_with_context(
        &self,
        ctx: &RequestContext,
        request: SetConversationPurposeRequest,
    ) -> SlackResult<Channel> {
        let envelope = self.call::<_, ChannelPayload>(ctx, &request).await?;
        Ok(envelope.data.channel)
    }

    #[instrument(skip(self, ctx, request), fields(channel = %request.channel))]
    async fn rename_with_context(
        &self,
        ctx: &RequestContext,
        request: RenameConversationRequest,
    ) -> SlackResult<Channel> {
        let envelope = self.call::<_, ChannelPayload>(ctx, &request).await?;
        Ok(envelope.data.channel)
    }

    #[instrument(skip(self, ctx, request), fields(channel = %request.channel, users = request.users.len()))]
    async fn invite_with_context(
        &self,
        ctx: &RequestContext,
        request: InviteToConversationRequest,
    ) -> SlackResult<Channel> {
        let envelope = self.call::<_, ChannelPayload>(ctx, &request).await?;
        Ok(envelope.data.channel)
    }

    #[instrument(skip(self, ctx, request), fields(channel = %request.channel))]
    async fn kick_with_context(
        &self,
        ctx: &RequestContext,
        request: KickFromConversationRequest,
    ) -> SlackResult<()> {
        self.call::<_, EmptyPayload>(ctx, &request).await?;
        Ok(())
    }

    #[instrument(skip(self, ctx, request), fields(channel = %request.channel))]
    async fn close_with_context(
        &self,
        ctx: &RequestContext,
        request: CloseConversationRequest,
    ) -> SlackResult<CloseConversationResponse> {
        let envelope = self
            .call::<_, CloseConversationResponse>(ctx, &request)
            .await?;
        Ok(envelope.data)
    }

    #[instrument(skip(self, ctx, request), fields(channel_name = %request.name))]
    async fn create_with_context(
        &self,
        ctx: &RequestContext,
        request: CreateConversationRequest,
    ) -> SlackResult<Channel> {
        let envelope = self.call::<_, ChannelPayload>(ctx, &request).await?;
        Ok(envelope.data.channel)
    }

    #[instrument(skip(self, ctx, request), fields(channel = %request.channel))]
    async fn info_with_context(
        &self,
        ctx: &RequestContext,
        request: ConversationInfoRequest,
    ) -> SlackResult<Channel> {
        let envelope = self.call::<_, ChannelPayload>(ctx, &request).await?;
        Ok(envelope.data.channel)
    }

    #[instrument(skip(self, ctx, request), fields(channel = %request.channel))]
    async fn join_with_context(
        &self,
        ctx: &RequestContext,
        request: JoinConversationRequest,
    ) -> SlackResult<Channel> {
        let envelope = self.call::<_, ChannelPayload>(ctx, &request).await?;
        Ok(envelope.data.channel)
    }

    #[instrument(skip(self, ctx, request), fields(channel = %request.channel))]
    async fn leave_with_context(
        &self,
        ctx: &RequestContext,
        request: LeaveConversationRequest,
    ) -> SlackResult<LeaveConversationResponse> {
        let envelope = self
            .call::<_, LeaveConversationResponse>(ctx, &request)
            .await?;
        Ok(envelope.data)
    }

    #[instrument(skip(self, ctx, request))]
    async fn list_with_context(
        &self,
        ctx: &RequestContext,
        request: ListConversationsRequest,
    ) -> SlackResult<CursorPage<Channel>> {
        let envelope = self
            .call::<_, ListConversationsPayload>(ctx, &request)
            .await?;
        let next_cursor = envelope.next_cursor();
        Ok(CursorPage::new(envelope.data.channels, next_cursor))
    }
}
