use jwt_simple::prelude::*;
use time::OffsetDateTime;

use crate::prelude::*;

/// Builds self-signed JWT client assertions for one client against one authority.
///
/// Every call produces a fresh assertion: a new 'jti' and timestamps taken at call time.
/// Nothing is cached.
pub struct SelfSignedJwt {
    ctx: LogContext,
    token_endpoint: url::Url,
    client_id: String,
    config: SelfSignedJwtConfig,
    signer: Box<dyn JwtSigner>,
}

impl SelfSignedJwt {
    /// JWT header 'typ'
    pub const TYP: &'static str = "JWT";

    /// Builder for `client_id` whose assertions are addressed to the token endpoint of `authority`
    pub fn new(ctx: LogContext, authority: &Authority, client_id: impl Into<String>) -> Self {
        Self {
            ctx,
            token_endpoint: authority.token_endpoint().clone(),
            client_id: client_id.into(),
            config: SelfSignedJwtConfig::default(),
            signer: Box::new(Rs256Signer),
        }
    }

    /// Replaces the default configuration
    pub fn with_config(mut self, config: SelfSignedJwtConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the default RS256 signer
    pub fn with_signer(mut self, signer: impl JwtSigner + 'static) -> Self {
        self.signer = Box::new(signer);
        self
    }

    /// Creates a new assertion signed with the private key of `certificate`.
    ///
    /// # Arguments
    /// * `certificate` - PEM private key of the client certificate
    /// * `thumbprint` - hex fingerprint of the client certificate, 128 or 160 bits, with or
    ///   without ':' or ' ' separators ex: `BD:D9:AC:87:50:D2:2F:1A:B4:33:EB:F5:58:D0:47:53:A5:CF:5B:A3`
    pub fn create(&self, certificate: &Pem, thumbprint: &str) -> RustyAssertionResult<ClientAssertion> {
        self.create_at(OffsetDateTime::now_utc(), certificate, thumbprint)
    }

    /// Same as [Self::create] with 'nbf' and 'exp' computed from `now`
    pub fn create_at(
        &self,
        now: OffsetDateTime,
        certificate: &Pem,
        thumbprint: &str,
    ) -> RustyAssertionResult<ClientAssertion> {
        let span = self.ctx.span("SelfSignedJwt");
        let _enter = span.enter();

        // fail before any cryptographic work
        let thumbprint = Thumbprint::try_from(thumbprint).inspect_err(|e| tracing::error!("{e}"))?;
        let header = Self::new_header(&thumbprint)?;
        let claims = self.new_claims(now)?;
        let jwt = self.signer.sign(header, claims, certificate)?;
        Self::verify_signature_present(&jwt).inspect_err(|e| tracing::error!("{e}"))?;
        Ok(ClientAssertion::new(jwt))
    }

    fn new_header(thumbprint: &Thumbprint) -> RustyAssertionResult<JWTHeader> {
        let x5t = thumbprint.to_x5t()?;
        tracing::debug!(%x5t, "Creating self signed JWT header");
        Ok(JWTHeader {
            algorithm: Rs256Signer::ALG.to_string(),
            signature_type: Some(Self::TYP.to_string()),
            certificate_sha1_thumbprint: Some(x5t),
            ..Default::default()
        })
    }

    fn new_claims(&self, now: OffsetDateTime) -> RustyAssertionResult<JWTClaims<NoCustomClaims>> {
        let lifetime = self.config.lifetime()?;
        let expiry = now.checked_add(lifetime).ok_or(RustyAssertionError::InvalidLifetime)?;
        let nbf = Self::unix_secs(now)?;
        let exp = Self::unix_secs(expiry)?;
        tracing::debug!(nbf, exp, "Creating self signed JWT payload");

        let mut claims = Claims::with_custom_claims(NoCustomClaims {}, Duration::from_secs(exp - nbf))
            .with_audience(self.token_endpoint.as_str())
            .with_issuer(&self.client_id)
            .with_subject(&self.client_id)
            .with_jwt_id(crate::new_jti());
        claims.issued_at = None;
        claims.invalid_before = Some(UnixTimeStamp::from_secs(nbf));
        claims.expires_at = Some(UnixTimeStamp::from_secs(exp));
        Ok(claims)
    }

    /// Structural check only: the signer must not have handed back an unsigned or truncated token
    fn verify_signature_present(jwt: &str) -> RustyAssertionResult<()> {
        match jwt.split('.').nth(2) {
            Some(signature) if !signature.is_empty() => Ok(()),
            _ => Err(RustyAssertionError::InvalidSignature),
        }
    }

    /// NumericDate seconds, an instant before the epoch has none
    fn unix_secs(instant: OffsetDateTime) -> RustyAssertionResult<u64> {
        u64::try_from(instant.unix_timestamp()).map_err(|_| RustyAssertionError::InvalidLifetime)
    }
}

impl std::fmt::Debug for SelfSignedJwt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelfSignedJwt")
            .field("ctx", &self.ctx)
            .field("token_endpoint", &self.token_endpoint.as_str())
            .field("client_id", &self.client_id)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
