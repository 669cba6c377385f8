//! Dashboard CSS styles
//!
//! Tailwind supplies the tier colors used by alerts and the health bar;
//! these rules cover the cards, buttons and modal.

pub const STYLES: &str = r"
:root {
    --card: #0f172a;
    --border: #1e293b;
    --text-dim: #94a3b8;
    --blue: #38bdf8;
}

.refresh-time { font-size: 12px; color: var(--text-dim); }

/* Cards */
.card {
    background: var(--card);
    border: 1px solid var(--border);
    border-radius: 12px;
    padding: 20px;
}

.card-title {
    font-size: 12px;
    color: var(--text-dim);
    text-transform: uppercase;
    letter-spacing: 0.05em;
    margin-bottom: 8px;
}

.card-value { font-size: 28px; font-weight: 700; }

.health-label { font-size: 12px; color: var(--text-dim); }

.health-track {
    height: 8px;
    margin-top: 12px;
    border-radius: 4px;
    overflow: hidden;
    background: var(--border);
}

/* Buttons */
.btn {
    padding: 8px 16px;
    border-radius: 6px;
    border: 1px solid var(--border);
    font-size: 14px;
    cursor: pointer;
    transition: opacity 0.2s;
}

.btn:hover { opacity: 0.85; }
.btn:disabled { opacity: 0.5; cursor: not-allowed; }
.btn-primary { background: var(--blue); color: #0f172a; border-color: var(--blue); }
.btn-secondary { background: transparent; color: inherit; }

/* Modal */
.modal {
    position: fixed;
    inset: 0;
    display: flex;
    align-items: center;
    justify-content: center;
    background: rgba(2, 6, 23, 0.75);
}

.modal.hidden { display: none; }

.modal-panel {
    width: 100%;
    max-width: 420px;
    background: var(--card);
    border: 1px solid var(--border);
    border-radius: 12px;
    padding: 24px;
}

.field { display: block; font-size: 13px; color: var(--text-dim); }

.field input, .field select {
    display: block;
    width: 100%;
    margin-top: 4px;
    padding: 8px;
    border-radius: 6px;
    border: 1px solid var(--border);
    background: #020617;
    color: inherit;
}
";
