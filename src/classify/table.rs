//! The closed transaction-type enumeration and its static metadata table.
//!
//! Declaration order is load-bearing: the classifier scans the table top to
//! bottom and several categories share overlapping method-name substrings
//! ("mint", "deposit", "withdraw", ...), so the order here is the sole
//! disambiguator. Do not reorder, alphabetize, or re-rank entries.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    // Basic transfers
    NativeTransfer,
    TokenTransfer,
    NftTransfer,
    BatchTransfer,
    // DeFi operations
    Swap,
    LiquidityProvision,
    LiquidityRemoval,
    Staking,
    Unstaking,
    Lending,
    Borrowing,
    Repayment,
    YieldFarming,
    Harvest,
    // Smart contract interactions
    ContractDeployment,
    ContractCall,
    ProxyUpgrade,
    DelegateCall,
    StaticCall,
    // Governance
    ProposalCreation,
    VoteCast,
    Delegate,
    // NFT operations
    NftMint,
    NftBurn,
    NftAuctionCreate,
    NftBid,
    NftAuctionSettle,
    // Token operations
    TokenMint,
    TokenBurn,
    TokenApprove,
    TokenPermit,
    // Bridge operations
    BridgeDeposit,
    BridgeWithdrawal,
    BridgeClaim,
    // Layer 2 operations
    L2Deposit,
    L2Withdrawal,
    L2BatchSubmission,
    // Multisig operations
    MultisigSubmission,
    MultisigConfirmation,
    MultisigExecution,
    // Other common operations
    Wrap,
    Unwrap,
    FlashLoan,
    Rebasing,
    ClaimRewards,
    // Fallback
    Unknown,
}

impl TransactionType {
    /// Every member, in declaration order. Discriminants equal positions,
    /// which `metadata` relies on for constant-time lookup.
    pub const ALL: [TransactionType; 46] = [
        TransactionType::NativeTransfer,
        TransactionType::TokenTransfer,
        TransactionType::NftTransfer,
        TransactionType::BatchTransfer,
        TransactionType::Swap,
        TransactionType::LiquidityProvision,
        TransactionType::LiquidityRemoval,
        TransactionType::Staking,
        TransactionType::Unstaking,
        TransactionType::Lending,
        TransactionType::Borrowing,
        TransactionType::Repayment,
        TransactionType::YieldFarming,
        TransactionType::Harvest,
        TransactionType::ContractDeployment,
        TransactionType::ContractCall,
        TransactionType::ProxyUpgrade,
        TransactionType::DelegateCall,
        TransactionType::StaticCall,
        TransactionType::ProposalCreation,
        TransactionType::VoteCast,
        TransactionType::Delegate,
        TransactionType::NftMint,
        TransactionType::NftBurn,
        TransactionType::NftAuctionCreate,
        TransactionType::NftBid,
        TransactionType::NftAuctionSettle,
        TransactionType::TokenMint,
        TransactionType::TokenBurn,
        TransactionType::TokenApprove,
        TransactionType::TokenPermit,
        TransactionType::BridgeDeposit,
        TransactionType::BridgeWithdrawal,
        TransactionType::BridgeClaim,
        TransactionType::L2Deposit,
        TransactionType::L2Withdrawal,
        TransactionType::L2BatchSubmission,
        TransactionType::MultisigSubmission,
        TransactionType::MultisigConfirmation,
        TransactionType::MultisigExecution,
        TransactionType::Wrap,
        TransactionType::Unwrap,
        TransactionType::FlashLoan,
        TransactionType::Rebasing,
        TransactionType::ClaimRewards,
        TransactionType::Unknown,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    Low,
    Medium,
    High,
}

/// Static classification metadata for one transaction type. Risk and gas
/// levels are coarse category labels, never derived from a transaction's
/// actual value or execution cost.
#[derive(Debug, Clone, Serialize)]
pub struct TransactionMetadata {
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub description: &'static str,
    /// Method-name substrings matched case-insensitively; "*" matches any.
    pub common_methods: &'static [&'static str],
    pub risk_level: Level,
    pub gas_usage_level: Level,
}

/// Total metadata lookup for a transaction type.
pub fn metadata(kind: TransactionType) -> &'static TransactionMetadata {
    &TRANSACTION_METADATA[kind as usize]
}

pub static TRANSACTION_METADATA: [TransactionMetadata; 46] = [
    TransactionMetadata {
        kind: TransactionType::NativeTransfer,
        description: "Direct transfer of native blockchain currency (ETH, MATIC, etc.)",
        common_methods: &["transfer", "send"],
        risk_level: Level::Low,
        gas_usage_level: Level::Low,
    },
    TransactionMetadata {
        kind: TransactionType::TokenTransfer,
        description: "Transfer of ERC20 tokens",
        common_methods: &["transfer", "transferFrom"],
        risk_level: Level::Low,
        gas_usage_level: Level::Medium,
    },
    TransactionMetadata {
        kind: TransactionType::NftTransfer,
        description: "Transfer of ERC721 or ERC1155 tokens",
        common_methods: &["transferFrom", "safeTransferFrom"],
        risk_level: Level::Medium,
        gas_usage_level: Level::Medium,
    },
    TransactionMetadata {
        kind: TransactionType::BatchTransfer,
        description: "Multiple token transfers in a single transaction",
        common_methods: &["batchTransfer", "multiTransfer", "safeBatchTransferFrom"],
        risk_level: Level::Medium,
        gas_usage_level: Level::High,
    },
    TransactionMetadata {
        kind: TransactionType::Swap,
        description: "Exchange of one token for another through DEX",
        common_methods: &["swap", "swapExactTokensForTokens", "swapTokensForExactTokens"],
        risk_level: Level::Medium,
        gas_usage_level: Level::High,
    },
    TransactionMetadata {
        kind: TransactionType::LiquidityProvision,
        description: "Adding liquidity to DEX pools",
        common_methods: &["addLiquidity", "mint", "join"],
        risk_level: Level::Medium,
        gas_usage_level: Level::High,
    },
    TransactionMetadata {
        kind: TransactionType::LiquidityRemoval,
        description: "Removing liquidity from DEX pools",
        common_methods: &["removeLiquidity", "burn", "exit"],
        risk_level: Level::Medium,
        gas_usage_level: Level::High,
    },
    TransactionMetadata {
        kind: TransactionType::Staking,
        description: "Locking tokens for rewards",
        common_methods: &["stake", "deposit", "lock"],
        risk_level: Level::Medium,
        gas_usage_level: Level::Medium,
    },
    TransactionMetadata {
        kind: TransactionType::Unstaking,
        description: "Withdrawing staked tokens",
        common_methods: &["unstake", "withdraw", "unlock"],
        risk_level: Level::Medium,
        gas_usage_level: Level::Medium,
    },
    TransactionMetadata {
        kind: TransactionType::Lending,
        description: "Supplying assets to lending protocols",
        common_methods: &["supply", "mint", "deposit"],
        risk_level: Level::Medium,
        gas_usage_level: Level::High,
    },
    TransactionMetadata {
        kind: TransactionType::Borrowing,
        description: "Borrowing assets from lending protocols",
        common_methods: &["borrow", "draw"],
        risk_level: Level::High,
        gas_usage_level: Level::High,
    },
    TransactionMetadata {
        kind: TransactionType::Repayment,
        description: "Repaying borrowed assets",
        common_methods: &["repay", "repayBorrow"],
        risk_level: Level::Low,
        gas_usage_level: Level::High,
    },
    TransactionMetadata {
        kind: TransactionType::YieldFarming,
        description: "Depositing tokens in yield farming protocols",
        common_methods: &["farm", "deposit", "stake"],
        risk_level: Level::High,
        gas_usage_level: Level::High,
    },
    TransactionMetadata {
        kind: TransactionType::Harvest,
        description: "Collecting farming rewards",
        common_methods: &["harvest", "getReward", "claim"],
        risk_level: Level::Low,
        gas_usage_level: Level::High,
    },
    TransactionMetadata {
        kind: TransactionType::ContractDeployment,
        description: "Deploying new smart contracts",
        common_methods: &["constructor"],
        risk_level: Level::High,
        gas_usage_level: Level::High,
    },
    TransactionMetadata {
        kind: TransactionType::ContractCall,
        description: "Standard interaction with smart contracts",
        common_methods: &["*"],
        risk_level: Level::Medium,
        gas_usage_level: Level::Medium,
    },
    TransactionMetadata {
        kind: TransactionType::ProxyUpgrade,
        description: "Upgrading proxy contract implementation",
        common_methods: &["upgrade", "upgradeToAndCall"],
        risk_level: Level::High,
        gas_usage_level: Level::High,
    },
    TransactionMetadata {
        kind: TransactionType::DelegateCall,
        description: "Contract calls using delegatecall",
        common_methods: &["delegatecall"],
        risk_level: Level::High,
        gas_usage_level: Level::High,
    },
    TransactionMetadata {
        kind: TransactionType::StaticCall,
        description: "Read-only contract calls",
        common_methods: &["staticcall"],
        risk_level: Level::Low,
        gas_usage_level: Level::Low,
    },
    TransactionMetadata {
        kind: TransactionType::ProposalCreation,
        description: "Creating governance proposals",
        common_methods: &["propose", "createProposal"],
        risk_level: Level::Medium,
        gas_usage_level: Level::High,
    },
    TransactionMetadata {
        kind: TransactionType::VoteCast,
        description: "Voting on governance proposals",
        common_methods: &["vote", "castVote"],
        risk_level: Level::Low,
        gas_usage_level: Level::Medium,
    },
    TransactionMetadata {
        kind: TransactionType::Delegate,
        description: "Delegating voting power",
        common_methods: &["delegate"],
        risk_level: Level::Medium,
        gas_usage_level: Level::Medium,
    },
    TransactionMetadata {
        kind: TransactionType::NftMint,
        description: "Creating new NFTs",
        common_methods: &["mint", "safeMint"],
        risk_level: Level::Medium,
        gas_usage_level: Level::High,
    },
    TransactionMetadata {
        kind: TransactionType::NftBurn,
        description: "Destroying NFTs",
        common_methods: &["burn"],
        risk_level: Level::High,
        gas_usage_level: Level::Medium,
    },
    TransactionMetadata {
        kind: TransactionType::NftAuctionCreate,
        description: "Creating NFT auctions",
        common_methods: &["createAuction", "list"],
        risk_level: Level::Medium,
        gas_usage_level: Level::High,
    },
    TransactionMetadata {
        kind: TransactionType::NftBid,
        description: "Bidding on NFT auctions",
        common_methods: &["bid", "placeBid"],
        risk_level: Level::Medium,
        gas_usage_level: Level::Medium,
    },
    TransactionMetadata {
        kind: TransactionType::NftAuctionSettle,
        description: "Settling NFT auctions",
        common_methods: &["settleAuction", "endAuction"],
        risk_level: Level::Low,
        gas_usage_level: Level::High,
    },
    TransactionMetadata {
        kind: TransactionType::TokenMint,
        description: "Creating new tokens",
        common_methods: &["mint"],
        risk_level: Level::High,
        gas_usage_level: Level::Medium,
    },
    TransactionMetadata {
        kind: TransactionType::TokenBurn,
        description: "Destroying tokens",
        common_methods: &["burn"],
        risk_level: Level::High,
        gas_usage_level: Level::Medium,
    },
    TransactionMetadata {
        kind: TransactionType::TokenApprove,
        description: "Approving token spending",
        common_methods: &["approve"],
        risk_level: Level::High,
        gas_usage_level: Level::Medium,
    },
    TransactionMetadata {
        kind: TransactionType::TokenPermit,
        description: "Gasless token approvals",
        common_methods: &["permit"],
        risk_level: Level::Medium,
        gas_usage_level: Level::Medium,
    },
    TransactionMetadata {
        kind: TransactionType::BridgeDeposit,
        description: "Depositing assets to bridge",
        common_methods: &["deposit", "bridge", "send"],
        risk_level: Level::High,
        gas_usage_level: Level::High,
    },
    TransactionMetadata {
        kind: TransactionType::BridgeWithdrawal,
        description: "Withdrawing assets from bridge",
        common_methods: &["withdraw", "claim"],
        risk_level: Level::Medium,
        gas_usage_level: Level::High,
    },
    TransactionMetadata {
        kind: TransactionType::BridgeClaim,
        description: "Claiming bridged assets",
        common_methods: &["claim", "finalize"],
        risk_level: Level::Low,
        gas_usage_level: Level::High,
    },
    TransactionMetadata {
        kind: TransactionType::L2Deposit,
        description: "Depositing to Layer 2",
        common_methods: &["deposit", "depositETH"],
        risk_level: Level::Medium,
        gas_usage_level: Level::High,
    },
    TransactionMetadata {
        kind: TransactionType::L2Withdrawal,
        description: "Withdrawing from Layer 2",
        common_methods: &["withdraw", "withdrawETH"],
        risk_level: Level::Medium,
        gas_usage_level: Level::High,
    },
    TransactionMetadata {
        kind: TransactionType::L2BatchSubmission,
        description: "Submitting L2 transaction batch",
        common_methods: &["submitBatch", "publishBatch"],
        risk_level: Level::High,
        gas_usage_level: Level::High,
    },
    TransactionMetadata {
        kind: TransactionType::MultisigSubmission,
        description: "Submitting multisig transaction",
        common_methods: &["submitTransaction"],
        risk_level: Level::Medium,
        gas_usage_level: Level::Medium,
    },
    TransactionMetadata {
        kind: TransactionType::MultisigConfirmation,
        description: "Confirming multisig transaction",
        common_methods: &["confirmTransaction"],
        risk_level: Level::Medium,
        gas_usage_level: Level::Medium,
    },
    TransactionMetadata {
        kind: TransactionType::MultisigExecution,
        description: "Executing confirmed multisig transaction",
        common_methods: &["executeTransaction"],
        risk_level: Level::High,
        gas_usage_level: Level::High,
    },
    TransactionMetadata {
        kind: TransactionType::Wrap,
        description: "Wrapping native currency (ETH -> WETH)",
        common_methods: &["deposit", "wrap"],
        risk_level: Level::Low,
        gas_usage_level: Level::Medium,
    },
    TransactionMetadata {
        kind: TransactionType::Unwrap,
        description: "Unwrapping wrapped native currency (WETH -> ETH)",
        common_methods: &["withdraw", "unwrap"],
        risk_level: Level::Low,
        gas_usage_level: Level::Medium,
    },
    TransactionMetadata {
        kind: TransactionType::FlashLoan,
        description: "Flash loan transactions",
        common_methods: &["flashLoan", "executeOperation"],
        risk_level: Level::High,
        gas_usage_level: Level::High,
    },
    TransactionMetadata {
        kind: TransactionType::Rebasing,
        description: "Token rebase operations",
        common_methods: &["rebase", "sync"],
        risk_level: Level::Medium,
        gas_usage_level: Level::High,
    },
    TransactionMetadata {
        kind: TransactionType::ClaimRewards,
        description: "Claiming protocol rewards",
        common_methods: &["claim", "getReward", "harvest"],
        risk_level: Level::Low,
        gas_usage_level: Level::Medium,
    },
    TransactionMetadata {
        kind: TransactionType::Unknown,
        description: "Unknown transaction type",
        common_methods: &["unknown"],
        risk_level: Level::High,
        gas_usage_level: Level::Medium,
    },
];
