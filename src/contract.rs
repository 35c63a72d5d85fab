use ethers::contract::abigen;

// Only `approve` is sent; the read methods are kept so the binding matches the deployed token.
abigen!(
    Erc20Token,
    r#"[
        function approve(address spender, uint256 value) external returns (bool)
        function allowance(address owner, address spender) external view returns (uint256)
        function balanceOf(address account) external view returns (uint256)
    ]"#,
);
